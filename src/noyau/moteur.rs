//! Noyau — moteur de transitions.
//!
//! Chaque opération lit un état et en produit un nouveau (jamais de mutation en place).
//! Deux modes logiques :
//! - Saisie : mode initial, toutes les opérations actives
//! - Erreur : entré seulement via une évaluation ratée ; seuls AC et ⌫ en sortent
//!   (remise à zéro totale), le reste est sans effet.

use tracing::{debug, info};

use super::etat::{Chiffre, ErreurCalc, EtatCalc, Evenement, Operateur, ZERO};
use super::eval::evaluer;
use super::format::format_nombre;

/// Réducteur : (état, événement) -> état.
pub fn reduire(etat: &EtatCalc, evenement: Evenement) -> EtatCalc {
    let suivant = match evenement {
        Evenement::Chiffre(c) => ajouter_chiffre(etat, c),
        Evenement::Operateur(op) => choisir_operateur(etat, op),
        Evenement::Egal => calculer_resultat(etat),
        Evenement::Effacer => effacer(),
        Evenement::Supprimer => supprimer_chiffre(etat),
    };

    debug!(
        ?evenement,
        courante = %suivant.valeur_courante,
        precedente = %suivant.valeur_precedente,
        historique = %suivant.historique,
        "transition"
    );

    suivant
}

/// AC : état par défaut, sans condition.
pub fn effacer() -> EtatCalc {
    EtatCalc::default()
}

/// ⌫ : retire le dernier caractère de la valeur courante.
pub fn supprimer_chiffre(etat: &EtatCalc) -> EtatCalc {
    if etat.erreur.is_some() {
        return effacer();
    }

    // Juste après "=" : on repart d’un placeholder propre.
    if etat.ecraser {
        return EtatCalc {
            valeur_courante: ZERO.to_string(),
            ecraser: false,
            ..etat.clone()
        };
    }

    if etat.valeur_courante == ZERO {
        return etat.clone();
    }

    let mut valeur = etat.valeur_courante.clone();
    valeur.pop();
    // "-5" -> "-" et "-0.5" -> ... -> "-0" : plus aucun chiffre utile.
    if matches!(valeur.as_str(), "" | "-" | "-0") {
        valeur = ZERO.to_string();
    }

    EtatCalc {
        valeur_courante: valeur,
        ..etat.clone()
    }
}

/// Saisie d’un chiffre ou du point décimal.
pub fn ajouter_chiffre(etat: &EtatCalc, chiffre: Chiffre) -> EtatCalc {
    if etat.erreur.is_some() {
        return etat.clone();
    }

    let c = chiffre.car();

    if etat.ecraser {
        // Nouveau départ ; un point seul devient "0.".
        let valeur = if chiffre.est_point() {
            "0.".to_string()
        } else {
            c.to_string()
        };
        return EtatCalc {
            valeur_courante: valeur,
            ecraser: false,
            ..etat.clone()
        };
    }

    if c == '0' && etat.valeur_courante == ZERO {
        return etat.clone();
    }

    if chiffre.est_point() && etat.valeur_courante.contains('.') {
        return etat.clone();
    }

    let valeur = if etat.valeur_courante == ZERO && !chiffre.est_point() {
        c.to_string()
    } else {
        let mut v = etat.valeur_courante.clone();
        v.push(c);
        v
    };

    EtatCalc {
        valeur_courante: valeur,
        ..etat.clone()
    }
}

/// Choix d’un opérateur (avec enchaînement : 2 + 3 * => 5 *).
pub fn choisir_operateur(etat: &EtatCalc, op: Operateur) -> EtatCalc {
    if etat.erreur.is_some() {
        return etat.clone();
    }

    // Pas d’expression qui commence par un opérateur.
    if etat.valeur_courante == ZERO && etat.valeur_precedente.is_empty() {
        return etat.clone();
    }

    if etat.valeur_precedente.is_empty() {
        return EtatCalc {
            historique: format!("{} {op}", etat.valeur_courante),
            valeur_precedente: etat.valeur_courante.clone(),
            valeur_courante: ZERO.to_string(),
            operateur: Some(op),
            ..etat.clone()
        };
    }

    if etat.operateur.is_some() && !etat.ecraser {
        return match evaluer(etat) {
            Err(e) => entrer_en_erreur(etat, e, etat.historique.clone()),
            Ok(v) => {
                let resultat = format_nombre(v);
                EtatCalc {
                    historique: format!("{resultat} {op}"),
                    valeur_precedente: resultat,
                    valeur_courante: ZERO.to_string(),
                    operateur: Some(op),
                    ..etat.clone()
                }
            }
        };
    }

    // Simple changement d’opérateur : opérandes intacts.
    EtatCalc {
        operateur: Some(op),
        historique: format!("{} {op}", etat.valeur_precedente),
        ..etat.clone()
    }
}

/// "=" : applique l’opérateur en attente.
pub fn calculer_resultat(etat: &EtatCalc) -> EtatCalc {
    let Some(op) = etat.operateur else {
        return etat.clone();
    };
    if etat.erreur.is_some() || etat.valeur_precedente.is_empty() || etat.ecraser {
        return etat.clone();
    }

    match evaluer(etat) {
        Err(e) => entrer_en_erreur(etat, e, String::new()),
        Ok(v) => EtatCalc {
            historique: format!(
                "{} {op} {} =",
                etat.valeur_precedente, etat.valeur_courante
            ),
            valeur_courante: format_nombre(v),
            valeur_precedente: String::new(),
            operateur: None,
            ecraser: true,
            ..etat.clone()
        },
    }
}

fn entrer_en_erreur(etat: &EtatCalc, erreur: ErreurCalc, historique: String) -> EtatCalc {
    info!(%erreur, expression = %etat.historique, "calcul refusé");
    EtatCalc {
        erreur: Some(erreur),
        valeur_courante: ZERO.to_string(),
        historique,
        ..etat.clone()
    }
}
