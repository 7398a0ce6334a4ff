// src/app.rs
//
// Calculatrice Zome — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use calculatrice_zome::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Disposition:
// - panneau droit (corps doré seulement) : série dorée + symétries
// - panneau central : calculatrice
//
// Important:
// - La gestion Enter/Backspace est faite dans vue.rs (quand le champ a le focus).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::{AppCalc, CorpsChoisi};

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = effacer seulement l’entrée (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        // Série et rotations n’existent que dans Q(φ).
        if self.corps == CorpsChoisi::Dore {
            egui::SidePanel::right("panneau_zome")
                .resizable(true)
                .default_width(320.0)
                .show(ctx, |ui| {
                    self.ui_panneaux(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
