//! Tests de propriétés : scénarios complets, de l’état par défaut à l’état final.
//!
//! Chaque scénario passe par le réducteur, comme le ferait l’adaptateur clavier.

use super::etat::{Chiffre, ErreurCalc, EtatCalc, Evenement, Operateur};
use super::moteur::{calculer_resultat, effacer, reduire};

/// Rejoue une suite de touches (syntaxe courte : chiffres, + - * /, =, C, <).
fn jouer(depuis: &EtatCalc, touches: &str) -> EtatCalc {
    touches.chars().fold(depuis.clone(), |e, t| {
        let ev = match t {
            '=' => Evenement::Egal,
            'C' => Evenement::Effacer,
            '<' => Evenement::Supprimer,
            c => match Operateur::depuis_jeton(c) {
                Some(op) => Evenement::Operateur(op),
                None => Evenement::Chiffre(
                    Chiffre::nouveau(c).unwrap_or_else(|| panic!("touche inconnue {c:?}")),
                ),
            },
        };
        reduire(&e, ev)
    })
}

fn depuis_defaut(touches: &str) -> EtatCalc {
    jouer(&EtatCalc::default(), touches)
}

#[test]
fn zero_idempotent() {
    let e = EtatCalc::default();
    assert_eq!(jouer(&e, "0"), e);

    let avec_operateur = depuis_defaut("8+");
    assert_eq!(avec_operateur.valeur_courante, "0");
    assert_eq!(jouer(&avec_operateur, "0"), avec_operateur);
}

#[test]
fn point_decimal_unique() {
    for depart in ["", "5", "5.", "12.5", "3+", "3+4=", "9/0="] {
        let e = jouer(&depuis_defaut(depart), "..");
        let points = e.valeur_courante.matches('.').count();
        assert!(points <= 1, "depart={depart:?} valeur={}", e.valeur_courante);
        if e.erreur.is_none() {
            assert_eq!(points, 1, "depart={depart:?}");
        }
    }
}

#[test]
fn division_par_zero() {
    let e = depuis_defaut("5/=");
    assert_eq!(e.erreur, Some(ErreurCalc::DivisionParZero));
    assert_eq!(e.affichage(), "Cannot divide by zero");
    assert_eq!(e.valeur_courante, "0");
    assert!(e.historique.is_empty());
}

#[test]
fn mode_erreur_bloque_tout_sauf_ac_et_suppr() {
    let erreur = depuis_defaut("5/=");
    assert_eq!(jouer(&erreur, "7"), erreur);
    assert_eq!(jouer(&erreur, "."), erreur);
    assert_eq!(jouer(&erreur, "+"), erreur);
    assert_eq!(jouer(&erreur, "="), erreur);
    assert_eq!(jouer(&erreur, "<"), EtatCalc::default());
    assert_eq!(jouer(&erreur, "C"), EtatCalc::default());
}

#[test]
fn enchainement() {
    let e = depuis_defaut("2+3*");
    assert_eq!(e.valeur_precedente, "5");
    assert_eq!(e.operateur, Some(Operateur::Fois));
    assert_eq!(e.historique, "5 *");
    assert_eq!(e.valeur_courante, "0");

    let fin = jouer(&e, "4=");
    assert_eq!(fin.valeur_courante, "20");
    assert_eq!(fin.historique, "5 * 4 =");
}

#[test]
fn enchainement_vers_division_par_zero() {
    let e = depuis_defaut("8/0+");
    assert_eq!(e.erreur, Some(ErreurCalc::DivisionParZero));
    assert_eq!(e.valeur_courante, "0");
}

#[test]
fn egal_idempotent() {
    let une_fois = depuis_defaut("12-5=");
    assert_eq!(une_fois.valeur_courante, "7");
    assert!(une_fois.ecraser);
    assert_eq!(calculer_resultat(&une_fois), une_fois);
    assert_eq!(jouer(&une_fois, "==="), une_fois);
}

#[test]
fn arrondi_correct() {
    let e = depuis_defaut("0.1+0.2=");
    assert_eq!(e.valeur_courante, "0.3");
    assert_eq!(e.historique, "0.1 + 0.2 =");
}

#[test]
fn arrondi_huit_decimales() {
    assert_eq!(depuis_defaut("1/3=").valeur_courante, "0.33333333");
    assert_eq!(depuis_defaut("2/3=").valeur_courante, "0.66666667");
}

#[test]
fn remise_a_zero_depuis_tout_etat() {
    for touches in ["", "123", "4.5*", "4.5*2", "9-10=", "7/0=", "1+2+3", "6<<<"] {
        let e = depuis_defaut(touches);
        assert_eq!(jouer(&e, "C"), EtatCalc::default(), "touches={touches:?}");
        assert_eq!(effacer(), EtatCalc::default());
    }
}

#[test]
fn resultat_reutilise_comme_operande() {
    let e = depuis_defaut("9-10=");
    assert_eq!(e.valeur_courante, "-1");

    let suite = jouer(&e, "*3=");
    assert_eq!(suite.historique, "-1 * 3 =");
    assert_eq!(suite.valeur_courante, "-3");
}

#[test]
fn chiffre_apres_egal_redemarre() {
    let e = depuis_defaut("2+2=5");
    assert_eq!(e.valeur_courante, "5");
    assert!(!e.ecraser);
    assert_eq!(e.operateur, None);
}

#[test]
fn point_apres_egal_donne_zero_point() {
    let e = depuis_defaut("2+2=.5");
    assert_eq!(e.valeur_courante, "0.5");
}

#[test]
fn resultat_nul_ne_demarre_pas_d_expression() {
    // "0" après "=" compte comme absence d’opérande.
    let e = depuis_defaut("3-3=");
    assert_eq!(e.valeur_courante, "0");
    assert_eq!(jouer(&e, "+"), e);
}

#[test]
fn operateur_juste_apres_enchainement_reevalue_sur_zero() {
    // Comportement conservé : après un enchaînement, ecraser reste faux,
    // donc un second opérateur évalue contre le placeholder "0".
    let e = depuis_defaut("2*3+-");
    assert_eq!(e.valeur_precedente, "6");
    assert_eq!(e.operateur, Some(Operateur::Moins));
    assert_eq!(e.historique, "6 -");
}

#[test]
fn suppression_puis_saisie() {
    let e = depuis_defaut("125<<7");
    assert_eq!(e.valeur_courante, "17");
}
