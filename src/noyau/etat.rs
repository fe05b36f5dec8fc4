//! src/noyau/etat.rs
//!
//! État de la calculatrice (valeur immuable) + types d’entrée.
//!
//! Contrats :
//! - `valeur_courante` n’est jamais vide ; "0" quand rien n’est saisi ;
//!   au plus un point décimal ; pas de zéro de tête hors "0" / "0.xxx".
//! - `valeur_precedente` vide = aucun opérande en attente.
//! - `erreur` présente => seuls `effacer` et `supprimer_chiffre` font quelque chose.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valeur courante “placeholder”.
pub const ZERO: &str = "0";

/// Seule erreur du moteur : elle est absorbée dans l’état, jamais levée.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErreurCalc {
    #[error("Cannot divide by zero")]
    DivisionParZero,
}

/// Opérateur binaire en attente.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operateur {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Moins,
    #[serde(rename = "*")]
    Fois,
    #[serde(rename = "/")]
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [Self::Plus, Self::Moins, Self::Fois, Self::Divise];

    /// Jeton ASCII (historique + clavier).
    pub fn jeton(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }

    /// Symbole affiché sur les boutons.
    pub fn symbole(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Moins => "−",
            Self::Fois => "×",
            Self::Divise => "÷",
        }
    }

    pub fn depuis_jeton(c: char) -> Option<Self> {
        Self::TOUS.into_iter().find(|op| op.jeton() == c)
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.jeton())
    }
}

/// Touche de saisie d’opérande : '0'..'9' ou '.'.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chiffre(char);

impl Chiffre {
    pub const POINT: Chiffre = Chiffre('.');

    pub fn nouveau(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    pub fn car(self) -> char {
        self.0
    }

    pub fn est_point(self) -> bool {
        self.0 == '.'
    }
}

/// Événement logique : une touche => un appel moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    Chiffre(Chiffre),
    Operateur(Operateur),
    Egal,
    Effacer,
    Supprimer,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtatCalc {
    pub valeur_courante: String,
    pub valeur_precedente: String,
    pub operateur: Option<Operateur>,
    /// Le prochain chiffre remplace `valeur_courante` au lieu de l’étendre.
    pub ecraser: bool,
    /// Trace lisible de l’expression (dérivée, jamais relue).
    pub historique: String,
    pub erreur: Option<ErreurCalc>,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            valeur_courante: ZERO.to_string(),
            valeur_precedente: String::new(),
            operateur: None,
            ecraser: false,
            historique: String::new(),
            erreur: None,
        }
    }
}

impl EtatCalc {
    /// Affichage principal : message d’erreur s’il existe, sinon la valeur courante.
    pub fn affichage(&self) -> String {
        match &self.erreur {
            Some(e) => e.to_string(),
            None => self.valeur_courante.clone(),
        }
    }

    /// Drapeau de mise en relief (erreur).
    pub fn en_erreur(&self) -> bool {
        self.erreur.is_some()
    }
}
