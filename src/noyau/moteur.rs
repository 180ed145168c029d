//! src/noyau/moteur.rs
//!
//! Moteur de saisie : accumule les chiffres, garde une opération en attente,
//! calcule UN résultat binaire à la demande.
//!
//! Contrats :
//! - Aucune opération ne renvoie d’erreur : division par zéro => sentinelle "Error",
//!   opérande illisible => rien, point en double => rien.
//! - Enchaînement gauche -> droite : 2 + 3 × 4 = donne 20 (pas de priorité).
//! - "Error" est un état d’affichage récupérable (chiffre, point, opération, AC).

use super::format::formater_nombre;
use super::lecture::lire_operande;
use super::operation::Operation;

/// Sentinelle affichée après une division par zéro.
pub const ERREUR: &str = "Error";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Moteur {
    /// Numéral en cours de saisie ou dernier résultat ("0" si vide).
    pub courante: String,
    /// Opérande gauche capturée au choix d’une opération ("" = aucune).
    pub precedente: String,
    pub operation: Option<Operation>,
    /// Vrai juste après une opération ou un résultat : le prochain chiffre repart de zéro.
    pub attente_operande: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            courante: "0".to_string(),
            precedente: String::new(),
            operation: None,
            attente_operande: false,
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /// AC : remise à zéro totale.
    pub fn reinitialiser(&mut self) {
        *self = Self::default();
        log::debug!("moteur remis à zéro");
    }

    /// DEL : retire le dernier caractère de l’opérande courante.
    pub fn effacer_dernier(&mut self) {
        if self.courante == "0" {
            return;
        }

        if self.courante.chars().count() == 1 {
            self.courante = "0".to_string();
        } else {
            self.courante.pop();
        }
    }

    /// Ajoute un chiffre (ou une suite de chiffres).
    pub fn ajouter_chiffre(&mut self, chiffre: &str) {
        if self.attente_operande {
            self.courante = chiffre.to_string();
            self.attente_operande = false;
        } else if self.courante == "0" {
            // pas de zéro de tête
            self.courante = chiffre.to_string();
        } else {
            self.courante.push_str(chiffre);
        }
    }

    /// Ajoute le point décimal (au plus un par numéral).
    pub fn ajouter_point(&mut self) {
        if self.attente_operande {
            self.courante = "0.".to_string();
            self.attente_operande = false;
            return;
        }

        if self.courante.contains('.') {
            return;
        }

        self.courante.push('.');
    }

    /// Choisit une opération ; replie d’abord l’opération en attente s’il y en a une.
    pub fn choisir_operation(&mut self, op: Operation) {
        if self.courante.is_empty() {
            return;
        }

        if !self.precedente.is_empty() {
            self.calculer();
        }

        self.operation = Some(op);
        self.precedente = self.courante.clone();
        self.attente_operande = true;
        log::debug!("opération choisie: {} {}", self.precedente, op);
    }

    /// "=" : applique l’opération en attente à (précédente, courante).
    pub fn calculer(&mut self) {
        let (Some(gauche), Some(droite)) = (
            lire_operande(&self.precedente),
            lire_operande(&self.courante),
        ) else {
            return;
        };
        let Some(op) = self.operation else {
            return;
        };

        match op.appliquer(gauche, droite) {
            Some(resultat) => {
                self.courante = formater_nombre(resultat);
                log::debug!("{gauche} {op} {droite} = {}", self.courante);
            }
            None => {
                log::warn!("division par zéro: {gauche} {op} {droite}");
                self.courante = ERREUR.to_string();
            }
        }

        self.precedente.clear();
        self.operation = None;
        self.attente_operande = true;
    }

    /// Ligne secondaire : "précédente symbole" si une opération est en attente, sinon vide.
    pub fn ligne_precedente(&self) -> String {
        match self.operation {
            Some(op) => format!("{} {}", self.precedente, op.symbole()),
            None => String::new(),
        }
    }

    pub fn est_en_erreur(&self) -> bool {
        self.courante == ERREUR
    }
}
