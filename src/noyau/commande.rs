// src/noyau/commande.rs
//
// Aiguillage : une commande par déclencheur (bouton ou touche).
// La table est figée (compatibilité d’interface) :
//   0-9        -> Chiffre
//   .          -> Point
//   + - * /    -> Operation (aussi + − × ÷ depuis les boutons)
//   = / Enter  -> Calculer
//   Escape     -> Reinitialiser
//   Backspace  -> Effacer

use super::moteur::Moteur;
use super::operation::Operation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Chiffre(char),
    Point,
    Operation(Operation),
    Calculer,
    Reinitialiser,
    Effacer,
}

impl Commande {
    /// Commande associée à un caractère tapé ; `None` si le caractère n’a pas de rôle.
    pub fn depuis_caractere(c: char) -> Option<Commande> {
        match c {
            '0'..='9' => Some(Commande::Chiffre(c)),
            '.' => Some(Commande::Point),
            '=' => Some(Commande::Calculer),
            _ => {
                let mut tampon = [0u8; 4];
                c.encode_utf8(&mut tampon)
                    .parse::<Operation>()
                    .ok()
                    .map(Commande::Operation)
            }
        }
    }

    /// Étiquette de bouton.
    pub fn etiquette(self) -> String {
        match self {
            Commande::Chiffre(c) => c.to_string(),
            Commande::Point => ".".to_string(),
            Commande::Operation(op) => op.symbole().to_string(),
            Commande::Calculer => "=".to_string(),
            Commande::Reinitialiser => "AC".to_string(),
            Commande::Effacer => "DEL".to_string(),
        }
    }
}

impl Moteur {
    /// Exécute une commande sur le moteur.
    pub fn appliquer(&mut self, commande: Commande) {
        match commande {
            Commande::Chiffre(c) => {
                let mut tampon = [0u8; 4];
                self.ajouter_chiffre(c.encode_utf8(&mut tampon));
            }
            Commande::Point => self.ajouter_point(),
            Commande::Operation(op) => self.choisir_operation(op),
            Commande::Calculer => self.calculer(),
            Commande::Reinitialiser => self.reinitialiser(),
            Commande::Effacer => self.effacer_dernier(),
        }
    }

    /// Exécute une suite de caractères ("2+3*4=").
    #[cfg(test)]
    pub fn taper(&mut self, touches: &str) {
        for c in touches.chars() {
            if let Some(cmd) = Commande::depuis_caractere(c) {
                self.appliquer(cmd);
            }
        }
    }
}
