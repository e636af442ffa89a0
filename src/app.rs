// src/app.rs
//
// Calculatrice RPN — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (commandes, terminal, etat, vue)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App
//
// Important:
// - Enter est géré dans vue.rs (quand le champ a le focus).
// - Une commande Q/QUIT ferme la fenêtre au frame suivant.

pub mod commandes;
pub mod etat;
pub mod terminal;
pub mod vue;


pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer seulement l’entrée.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        if self.quitter {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
