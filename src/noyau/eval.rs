//! Noyau — évaluation de l’expression en attente.
//!
//! Fonction pure : lit `valeur_precedente <op> valeur_courante`, ne touche pas l’état.

use super::etat::{ErreurCalc, EtatCalc, Operateur};
use super::format::arrondir;
use super::lecture::lire_operande;

/// Évalue l’expression en attente.
///
/// - opérande illisible ou pas d’opérateur : renvoie la valeur courante telle quelle
///   (0 si elle-même est illisible), sans erreur ni arrondi
/// - `/` par zéro : `ErreurCalc::DivisionParZero`, la division n’est pas faite
/// - sinon : résultat arrondi à 8 décimales
pub fn evaluer(etat: &EtatCalc) -> Result<f64, ErreurCalc> {
    let courante = lire_operande(&etat.valeur_courante);

    let (Some(prec), Some(cour), Some(op)) = (
        lire_operande(&etat.valeur_precedente),
        courante,
        etat.operateur,
    ) else {
        return Ok(courante.unwrap_or(0.0));
    };

    let brut = match op {
        Operateur::Plus => prec + cour,
        Operateur::Moins => prec - cour,
        Operateur::Fois => prec * cour,
        Operateur::Divise => {
            if cour == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            prec / cour
        }
    };

    Ok(arrondir(brut))
}
