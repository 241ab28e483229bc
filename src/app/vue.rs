// src/app/vue.rs
//
// Vue (UI egui): natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé : chaque bouton pousse un identifiant (“#7”, “sin”, “ANS”…)
// - Clavier : Enter évalue, Backspace retire une touche, chiffres/opérateurs tapés
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)
// - Aucun champ texte : les touches clavier passent par Event::Text

use eframe::egui;

use super::etat::{touche_clavier, AppCalc, LARGEUR_MAX, LARGEUR_MIN};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_clavier(ui);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_reglages(ui);

                ui.add_space(8.0);

                self.ui_fonctions(ui);

                ui.add_space(8.0);

                self.ui_pave_numerique(ui);
            });
    }

    /// Clavier physique : pas de champ focus, on lit les événements de la frame.
    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        // champ de largeur en cours d’édition : il garde ses touches
        if ui.ctx().wants_keyboard_input() {
            return;
        }

        let (enter, backspace, textes) = ui.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                textes,
            )
        });

        for c in textes.iter().flat_map(|t| t.chars()) {
            if let Some(id) = touche_clavier(c) {
                self.appuyer(id);
            }
        }
        if backspace {
            self.backspace();
        }
        if enter {
            self.evaluer();
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.monospace(self.indicateur());
            if !self.calcul.is_empty() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!("{} =", self.calcul));
                });
            }
        });

        Self::champ_monospace(ui, "ecran_entree", &self.texte_entree(), 1);
        Self::champ_monospace(ui, "ecran_resultat", &self.affichage, 1);

        if !self.erreur.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
        if !self.ignores.is_empty() {
            ui.add_space(4.0);
            ui.colored_label(
                ui.visuals().warn_fg_color,
                format!("touches ignorées : {}", self.ignores.join(" ")),
            );
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; AC = tout (largeur conservée)
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
            self.bouton_action(ui, "DEG/RAD", "Change l’unité d’angle", Action::Echelle);

            ui.separator();

            ui.label("Écran :");
            let mut l = self.session.largeur() as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut l)
                    .speed(1)
                    .range(LARGEUR_MIN as u32..=LARGEUR_MAX as u32)
                    .suffix(" car."),
            );
            if resp.changed() {
                self.set_largeur(l as usize);
            }
        });

        ui.horizontal(|ui| {
            self.bouton_memoire(ui, "STO", "Calcule puis range en mémoire", "STO");
            self.bouton_memoire(ui, "M+", "Calcule puis ajoute à la mémoire", "M+");
            self.bouton_memoire(ui, "M−", "Calcule puis retranche de la mémoire", "M-");
            self.bouton_action(ui, "MCL", "Efface la mémoire", Action::EffacerMemoire);
            self.bouton_touche(ui, "RCL", "RCL");
            self.bouton_touche(ui, "Ans", "ANS");
        });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_fonctions")
            .num_columns(6)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, "sin", "sin");
                self.bouton_touche(ui, "cos", "cos");
                self.bouton_touche(ui, "tan", "tan");
                self.bouton_touche(ui, "asin", "asin");
                self.bouton_touche(ui, "acos", "acos");
                self.bouton_touche(ui, "atan", "atan");
                ui.end_row();

                self.bouton_touche(ui, "log", "log");
                self.bouton_touche(ui, "ln", "ln");
                self.bouton_touche(ui, "10ˣ", "tenX");
                self.bouton_touche(ui, "eˣ", "exp");
                self.bouton_touche(ui, "√", "sqrt");
                self.bouton_touche(ui, "∛", "cbrt");
                ui.end_row();

                self.bouton_touche(ui, "x²", "2");
                self.bouton_touche(ui, "x³", "3");
                self.bouton_touche(ui, "x⁻¹", "inv");
                self.bouton_touche(ui, "x!", "!");
                self.bouton_touche(ui, "xʸ", "^");
                self.bouton_touche(ui, "ˣ√", "root");
                ui.end_row();

                self.bouton_touche(ui, "nCr", "C");
                self.bouton_touche(ui, "nPr", "P");
                self.bouton_touche(ui, "π", "pi");
                self.bouton_touche(ui, "(", "(");
                self.bouton_touche(ui, ")", ")");
                self.bouton_touche(ui, "(−)", "u-");
                ui.end_row();
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, "7", "#7");
                self.bouton_touche(ui, "8", "#8");
                self.bouton_touche(ui, "9", "#9");
                self.bouton_action(ui, "DEL", "Retire la dernière touche", Action::Backspace);
                ui.end_row();

                self.bouton_touche(ui, "4", "#4");
                self.bouton_touche(ui, "5", "#5");
                self.bouton_touche(ui, "6", "#6");
                self.bouton_touche(ui, "×", "*");
                ui.end_row();

                self.bouton_touche(ui, "1", "#1");
                self.bouton_touche(ui, "2", "#2");
                self.bouton_touche(ui, "3", "#3");
                self.bouton_touche(ui, "÷", "/");
                ui.end_row();

                self.bouton_touche(ui, "0", "#0");
                self.bouton_touche(ui, ".", "#.");
                self.bouton_touche(ui, "EXP", "E");
                self.bouton_touche(ui, "+", "+");
                ui.end_row();

                ui.label("");
                ui.label("");
                self.bouton_action(ui, "=", "Calcule l’entrée", Action::Evaluer);
                self.bouton_touche(ui, "−", "-");
                ui.end_row();
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(contenu);
                    });
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace(),
                Action::Evaluer => self.evaluer(),
                Action::EffacerMemoire => self.effacer_memoire(),
                Action::Echelle => self.basculer_echelle(),
            }
        }
    }

    fn bouton_memoire(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, id: &'static str) {
        let resp = ui
            .add_sized([46.0, 28.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.touche_memoire(id);
        }
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, id: &'static str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(id);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
    Backspace,
    Evaluer,
    EffacerMemoire,
    Echelle,
}
