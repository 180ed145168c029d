// src/app/clavier.rs
//
// Clavier -> Commande (natif + web)
// ---------------------------------
// - Caractères (Event::Text) : 0-9 . + - * / =
// - Touches   (Event::Key)  : Enter (=), Escape (AC), Backspace (DEL)
//
// Note :
// - "=" arrive en texte, Enter en touche : pas de double déclenchement.
// - On ignore les relâchements et les répétitions auto sur Escape.

use eframe::egui;

use crate::noyau::Commande;

/// Commande associée à un évènement egui, si l’évènement a un rôle.
pub fn commande_evenement(ev: &egui::Event) -> Option<Commande> {
    match ev {
        egui::Event::Text(t) => commande_texte(t),
        egui::Event::Key {
            key,
            pressed: true,
            repeat,
            ..
        } => {
            if *repeat && *key == egui::Key::Escape {
                return None;
            }
            commande_touche(*key)
        }
        _ => None,
    }
}

/// Texte tapé : une seule commande par caractère reconnu (un seul caractère attendu).
pub fn commande_texte(t: &str) -> Option<Commande> {
    let mut it = t.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Commande::depuis_caractere(c),
        _ => None,
    }
}

/// Touches sans texte associé.
pub fn commande_touche(key: egui::Key) -> Option<Commande> {
    match key {
        egui::Key::Enter => Some(Commande::Calculer),
        egui::Key::Escape => Some(Commande::Reinitialiser),
        egui::Key::Backspace => Some(Commande::Effacer),
        _ => None,
    }
}
