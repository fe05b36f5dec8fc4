// src/app/clavier.rs
//
// Adaptateur d’entrée : touches (egui ou script texte) -> Evenement.
// Aucune logique d’état ici : une touche = un événement, ou rien.

use eframe::egui;
use thiserror::Error;

use crate::noyau::{Chiffre, Evenement, Operateur};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurTouche {
    #[error("touche inconnue : {0:?}")]
    Inconnue(char),
}

/// Caractère tapé : chiffres, point, + - * /, "=".
pub fn evenement_depuis_car(c: char) -> Option<Evenement> {
    if c == '=' {
        return Some(Evenement::Egal);
    }
    if let Some(op) = Operateur::depuis_jeton(c) {
        return Some(Evenement::Operateur(op));
    }
    Chiffre::nouveau(c).map(Evenement::Chiffre)
}

/// Touches “spéciales” (sans texte associé).
pub fn evenement_depuis_touche(key: egui::Key) -> Option<Evenement> {
    match key {
        egui::Key::Enter => Some(Evenement::Egal),
        egui::Key::Escape => Some(Evenement::Effacer),
        egui::Key::Backspace => Some(Evenement::Supprimer),
        _ => None,
    }
}

/// Événements egui d’une frame -> événements moteur (ordre conservé).
///
/// Les caractères arrivent via `Event::Text`, les touches spéciales via `Event::Key`.
pub fn evenements_egui(events: &[egui::Event]) -> Vec<Evenement> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().filter_map(evenement_depuis_car)),
            egui::Event::Key {
                key, pressed: true, ..
            } => out.extend(evenement_depuis_touche(*key)),
            _ => {}
        }
    }
    out
}

/// Script texte : même table que le clavier, plus `C` (AC) et `<` (⌫).
/// Les espaces sont ignorés ; tout autre caractère est refusé.
pub fn evenements_depuis_texte(script: &str) -> Result<Vec<Evenement>, ErreurTouche> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'C' | 'c' => Ok(Evenement::Effacer),
            '<' => Ok(Evenement::Supprimer),
            _ => evenement_depuis_car(c).ok_or(ErreurTouche::Inconnue(c)),
        })
        .collect()
}
