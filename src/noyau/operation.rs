// src/noyau/operation.rs
//
// Les quatre opérations binaires du moteur.
// - symbole affiché : + − × ÷ (le moins est U+2212, pas le tiret ASCII)
// - alias clavier    : + - * /

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

/// Symbole qui n’est ni un opérateur affiché ni un alias clavier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("opérateur inconnu: {0:?}")]
pub struct ErreurOperation(pub String);

impl Operation {
    #[cfg(test)]
    pub const TOUTES: [Operation; 4] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Symbole affiché (bouton + ligne secondaire).
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Soustraction => "−",
            Operation::Multiplication => "×",
            Operation::Division => "÷",
        }
    }

    /// Touche clavier équivalente.
    pub fn touche(self) -> char {
        match self {
            Operation::Addition => '+',
            Operation::Soustraction => '-',
            Operation::Multiplication => '*',
            Operation::Division => '/',
        }
    }

    /// Applique l’opération : `gauche` = opérande précédente, `droite` = opérande courante.
    ///
    /// `None` uniquement pour la division par zéro (état "Error" côté moteur).
    pub fn appliquer(self, gauche: f64, droite: f64) -> Option<f64> {
        match self {
            Operation::Addition => Some(gauche + droite),
            Operation::Soustraction => Some(gauche - droite),
            Operation::Multiplication => Some(gauche * droite),
            Operation::Division => {
                if droite == 0.0 {
                    None
                } else {
                    Some(gauche / droite)
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

impl FromStr for Operation {
    type Err = ErreurOperation;

    /// Accepte le symbole affiché OU l’alias clavier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operation::Addition),
            "−" | "-" => Ok(Operation::Soustraction),
            "×" | "*" => Ok(Operation::Multiplication),
            "÷" | "/" => Ok(Operation::Division),
            autre => Err(ErreurOperation(autre.to_string())),
        }
    }
}
