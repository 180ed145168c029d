//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’unique moteur de la session et préparer les deux lignes d’affichage.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par le moteur.
//! - Le moteur garde le numéral complet ; seul l’AFFICHAGE est borné.

use crate::noyau::{Commande, Moteur};

/// Largeur max de l’affichage principal (en caractères).
pub const LARGEUR_AFFICHAGE: usize = 16;

/// Préfixe quand l’affichage est tronqué (on garde la fin : les derniers chiffres tapés).
const ELLIPSE: char = '…';

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(), // session neuve : "0", rien en attente
        }
    }
}

impl AppCalc {
    /// Point d’entrée unique des boutons et du clavier.
    pub fn executer(&mut self, commande: Commande) {
        log::trace!("commande: {commande:?}");
        self.moteur.appliquer(commande);
    }

    /// Ligne principale, bornée à LARGEUR_AFFICHAGE.
    pub fn ligne_courante(&self) -> String {
        tronquer_affichage(&self.moteur.courante, LARGEUR_AFFICHAGE)
    }

    /// Ligne secondaire : "précédente symbole" ou vide.
    pub fn ligne_precedente(&self) -> String {
        self.moteur.ligne_precedente()
    }
}

/// Garde les `largeur - 1` derniers caractères précédés de "…" si `s` dépasse `largeur`.
pub fn tronquer_affichage(s: &str, largeur: usize) -> String {
    let n = s.chars().count();
    if n <= largeur || largeur == 0 {
        return s.to_string();
    }

    let garde = largeur - 1;
    let mut out = String::with_capacity(s.len());
    out.push(ELLIPSE);
    out.extend(s.chars().skip(n - garde));
    out
}
