//! Noyau de la calculatrice (transitions d’état pures)
//!
//! Organisation interne :
//! - etat.rs     : EtatCalc + Operateur/Chiffre/Evenement + ErreurCalc
//! - lecture.rs  : lecture d’un opérande textuel
//! - format.rs   : arrondi 8 décimales (exact) + texte canonique
//! - eval.rs     : évaluation de l’expression en attente
//! - moteur.rs   : les opérations + réducteur

pub mod etat;
pub mod eval;
pub mod format;
pub mod lecture;
pub mod moteur;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use etat::{Chiffre, EtatCalc, Evenement, Operateur};
pub use moteur::reduire;
