// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Enter soumet la ligne (quand le champ est focus)
// - Boutons de commande C/R/D/L/Q : mêmes effets que les commandes tapées
// - Boutons opérateurs : insèrent le nom dans l’entrée
// - Pile affichée sommet en haut, étiquettes identiques au listing

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::format::format_pile;
use crate::noyau::operateurs::noms;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pile(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_journal(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 3 4 +, 2 3 **, 9 sqrt  (C R D L Q)")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter : egui rend le focus au moment de la validation, d’où lost_focus()
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.soumettre_entree();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Remet la pile à [0.0]", Action::Commande("C"));
            self.bouton_action(ui, "R", "Échange les deux sommets", Action::Commande("R"));
            self.bouton_action(ui, "D", "Retire le sommet", Action::Commande("D"));
            self.bouton_action(ui, "L", "Liste la pile au journal", Action::Commande("L"));
            self.bouton_action(ui, "Q", "Quitter", Action::Commande("Q"));

            ui.separator();

            self.bouton_action(ui, "⌫", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Vide le journal", Action::ViderJournal);
        });

        ui.add_space(8.0);

        // Opérateurs (table complète, dans l’ordre de déclaration)
        ui.horizontal_wrapped(|ui| {
            for nom in noms() {
                let resp = ui.add_sized([46.0, 28.0], egui::Button::new(nom));
                if resp.clicked() {
                    self.inserer(nom);
                }
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_chiffre(ui, "7");
                self.bouton_chiffre(ui, "8");
                self.bouton_chiffre(ui, "9");
                self.bouton_action(ui, "␣", "Sépare deux jetons", Action::Espace);
                ui.end_row();

                self.bouton_chiffre(ui, "4");
                self.bouton_chiffre(ui, "5");
                self.bouton_chiffre(ui, "6");
                self.bouton_chiffre(ui, "-");
                ui.end_row();

                self.bouton_chiffre(ui, "1");
                self.bouton_chiffre(ui, "2");
                self.bouton_chiffre(ui, "3");
                self.bouton_chiffre(ui, "e");
                ui.end_row();

                self.bouton_chiffre(ui, "0");
                self.bouton_chiffre(ui, ".");
                ui.label("");
                self.bouton_action(ui, "ENTER", "Évalue la ligne", Action::Soumettre);
                ui.end_row();
            });
    }

    fn ui_pile(&mut self, ui: &mut egui::Ui) {
        ui.label("Pile (sommet en haut) :");

        // même rendu que le listing L, sommet en haut
        let lignes = format_pile(self.calc.pile());
        let n = lignes.len();
        let contenu = if n == 0 {
            "(vide)".to_string()
        } else {
            lignes.into_iter().rev().collect::<Vec<_>>().join("\n")
        };

        Self::champ_monospace(ui, "pile_out", &contenu, n.clamp(1, 12));
    }

    fn ui_journal(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Journal")
            .default_open(true)
            .show(ui, |ui| {
                let contenu = self.journal.join("\n");
                Self::champ_monospace(ui, "journal_out", &contenu, 6);
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule, cadre visuel via Frame + Label monospace.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Commande(c) => {
                    self.executer(c);
                }
                Action::Soumettre => self.soumettre_entree(),
                Action::ClearEntree => self.clear_entree(),
                Action::ViderJournal => self.vider_journal(),
                Action::Espace => {
                    if !self.entree.is_empty() && !self.entree.ends_with(' ') {
                        self.entree.push(' ');
                    }
                }
            }
            self.focus_entree = true;
        }
    }

    /// Chiffres / signe / point : collés au jeton courant (pas d’espace auto).
    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, label: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(label);
            self.focus_entree = true;
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Commande(&'static str),
    Soumettre,
    ClearEntree,
    ViderJournal,
    Espace,
}
