// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Deux lignes : opération en attente (petite) + entrée courante (grande)
// - Pavé tactile : gros boutons, une Commande par bouton
// - Clavier : géré dans app.rs (global), pas ici

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Commande, Operation};

/// Taille des boutons du pavé.
const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

/// Taille de police de la ligne courante.
const TAILLE_COURANTE: f32 = 36.0;

/// Taille de police de la ligne précédente.
const TAILLE_PRECEDENTE: f32 = 18.0;

/// Disposition du pavé (4 colonnes) ; `None` = case vide.
const PAVE: [[Option<Commande>; 4]; 5] = [
    [
        Some(Commande::Reinitialiser),
        Some(Commande::Effacer),
        None,
        Some(Commande::Operation(Operation::Division)),
    ],
    [
        Some(Commande::Chiffre('7')),
        Some(Commande::Chiffre('8')),
        Some(Commande::Chiffre('9')),
        Some(Commande::Operation(Operation::Multiplication)),
    ],
    [
        Some(Commande::Chiffre('4')),
        Some(Commande::Chiffre('5')),
        Some(Commande::Chiffre('6')),
        Some(Commande::Operation(Operation::Soustraction)),
    ],
    [
        Some(Commande::Chiffre('1')),
        Some(Commande::Chiffre('2')),
        Some(Commande::Chiffre('3')),
        Some(Commande::Operation(Operation::Addition)),
    ],
    [
        Some(Commande::Chiffre('0')),
        Some(Commande::Point),
        None,
        Some(Commande::Calculer),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);

        ui.add_space(10.0);

        self.ui_pave(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        let precedente = self.ligne_precedente();
        let courante = self.ligne_courante();
        let en_erreur = self.moteur.est_en_erreur();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne vide gardée à hauteur fixe : l’affichage ne saute pas
                    let txt = if precedente.is_empty() { " " } else { precedente.as_str() };
                    ui.label(
                        egui::RichText::new(txt)
                            .monospace()
                            .size(TAILLE_PRECEDENTE)
                            .color(ui.visuals().weak_text_color()),
                    );

                    let mut riche = egui::RichText::new(courante).monospace().size(TAILLE_COURANTE);
                    if en_erreur {
                        riche = riche.color(ui.visuals().error_fg_color);
                    }
                    ui.label(riche);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for case in rangee {
                        match case {
                            Some(cmd) => self.bouton(ui, cmd),
                            None => {
                                ui.label("");
                            }
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, commande: Commande) {
        let texte = egui::RichText::new(commande.etiquette()).size(20.0);
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte));

        let resp = match commande {
            Commande::Reinitialiser => resp.on_hover_text("Remise à zéro totale (Échap)"),
            Commande::Effacer => resp.on_hover_text("Efface le dernier caractère (Retour arrière)"),
            Commande::Calculer => resp.on_hover_text("Calcule (Entrée ou =)"),
            Commande::Operation(op) => resp.on_hover_text(format!("Touche {}", op.touche())),
            _ => resp,
        };

        if resp.clicked() {
            self.executer(commande);
        }
    }
}
