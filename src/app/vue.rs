// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : trace (description du moteur) + valeur courante
// - Pavé : chiffres à gauche, symboles du moteur à droite
// - Clavier : chiffres et '.' tapés directement, Enter = "=", Escape = "C" (voir app.rs)

use eframe::egui;

use super::etat::AppCalc;

const TAILLE_TOUCHE: [f32; 2] = [56.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice scientifique");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.horizontal_top(|ui| {
            self.ui_pave_numerique(ui);
            ui.separator();
            self.ui_pave_operations(ui);
        });

        self.ui_clavier(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.monospace(self.trace());
                    // Curseur visible pendant la frappe
                    let texte = if self.en_saisie() {
                        format!("{}_", self.affichage())
                    } else {
                        self.affichage()
                    };
                    ui.label(egui::RichText::new(texte).monospace().size(32.0));
                });
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for c in rangee {
                        self.bouton_chiffre(ui, c);
                    }
                    ui.end_row();
                }
                self.bouton_chiffre(ui, "0");
                self.bouton_chiffre(ui, ".");
                ui.end_row();
            });
    }

    fn ui_pave_operations(&mut self, ui: &mut egui::Ui) {
        let symboles = self.symboles();
        egui::Grid::new("pave_operations")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in symboles.chunks(4) {
                    for s in rangee {
                        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(*s));
                        if resp.clicked() {
                            self.touche_operation(s);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, chiffre: &str) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(chiffre));
        if resp.clicked() {
            self.touche_chiffre(chiffre);
        }
    }

    /// Saisie clavier : chiffres / point, Enter = "=".
    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars().filter(|c| c.is_ascii_digit() || *c == '.') {
                        self.touche_chiffre(&c.to_string());
                    }
                }
                egui::Event::Key {
                    key: egui::Key::Enter,
                    pressed: true,
                    ..
                } => self.touche_operation("="),
                _ => {}
            }
        }
    }
}
