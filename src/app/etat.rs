//! src/app/etat.rs
//!
//! Store UI (sans vue) : garde le dernier EtatCalc produit par le noyau.
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout passe par `noyau::reduire`.
//! - La vue et l’adaptateur clavier lisent l’état, seul `envoyer` le remplace.

use crate::noyau::{reduire, EtatCalc, Evenement};

use super::clavier::{evenements_depuis_texte, ErreurTouche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    etat: EtatCalc,
}

impl AppCalc {
    /// Dernier état produit.
    pub fn etat(&self) -> &EtatCalc {
        &self.etat
    }

    /// Un événement => une transition.
    pub fn envoyer(&mut self, evenement: Evenement) {
        self.etat = reduire(&self.etat, evenement);
    }

    pub fn envoyer_tous(&mut self, evenements: impl IntoIterator<Item = Evenement>) {
        for ev in evenements {
            self.envoyer(ev);
        }
    }

    /// Rejoue un script de touches (mode sans fenêtre).
    ///
    /// Le script est validé en entier avant la première transition :
    /// une touche inconnue laisse l’état intact.
    pub fn rejouer_texte(&mut self, script: &str) -> Result<&EtatCalc, ErreurTouche> {
        let evenements = evenements_depuis_texte(script)?;
        self.envoyer_tous(evenements);
        Ok(&self.etat)
    }
}
