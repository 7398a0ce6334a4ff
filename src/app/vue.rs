// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Backspace efface (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Choix du corps (Q(φ) / Q(√2)) et du format d’affichage EXACT
// - Panneaux du corps doré : série dorée + 60 rotations icosaédriques
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)
// - Enter suffit (clavier PC + “Enter” virtuel mobile selon navigateur)

use eframe::egui;

use crate::noyau::format::{format_element, format_quaternion, format_vecteur};
use crate::noyau::serie::{format_symboles, golden_series, symbol_sequence};
use crate::noyau::{
    eval_expression_format, ErreurNoyau, FormatNombre, Golden, QuadraticField, RootTwo,
};

use super::etat::{AppCalc, CorpsChoisi, Demarche, DIGITS_MAX, NB_ROTATIONS, PROFONDEUR_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Zome");
                ui.add_space(6.0);

                self.ui_corps(ui);

                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    /// Panneaux secondaires (corps doré) : série + symétries.
    pub fn ui_panneaux(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("panneaux_zome")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_serie(ui);
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);
                self.ui_symetrie(ui);
            });
    }

    fn ui_corps(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Corps :");
            let mut corps = self.corps;
            for c in [CorpsChoisi::Dore, CorpsChoisi::RacineDeux] {
                ui.selectable_value(&mut corps, c, c.libelle());
            }
            if corps != self.corps {
                self.set_corps(corps);
            }

            ui.separator();

            ui.label("Format :");
            let mut format = self.format;
            for f in FormatNombre::TOUS {
                ui.selectable_value(&mut format, f, f.libelle());
            }
            if format != self.format {
                self.set_format(format);
                // réafficher tout de suite dans le nouveau format
                if !self.entree.trim().is_empty() {
                    self.eval_via_noyau();
                }
            }
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (1 + φ)/2, phi^5 - 3, inv(1 + √2)")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / fonctions / DEL / C / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
            self.focus_entree = true;
        }

        // --- Clavier : Backspace (seulement si le champ est focus) ---
        // TextEdit gère déjà Backspace “normal”, backspace_entree() efface
        // des motifs complets ("inv(", "phi", "√2").
        let backspace = ui.input(|i| i.key_pressed(egui::Key::Backspace));
        if resp.has_focus() && backspace {
            self.backspace_entree();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Actions + ΣLocal
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("ΣLocal :");
            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=DIGITS_MAX as u32)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        ui.add_space(8.0);

        // Touches rapides + générateur + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", ")", InsertKind::CloseParen);

            self.bouton_insert(ui, "+", "+", InsertKind::Op);
            self.bouton_insert(ui, "-", "-", InsertKind::Op);
            self.bouton_insert(ui, "*", "*", InsertKind::Op);
            self.bouton_insert(ui, "/", "/", InsertKind::Op);
            self.bouton_insert(ui, "^", "^", InsertKind::Op);

            ui.separator();

            let g = self.corps.generateur();
            self.bouton_insert(ui, g, g, InsertKind::Word);
            self.bouton_insert(ui, "inv", "inv(", InsertKind::Func);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_zome")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", "6", InsertKind::Digit);
                self.bouton_insert(ui, "/", "/", InsertKind::Digit); // fraction collée : 3/4
                ui.end_row();

                self.bouton_insert(ui, "1", "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", "3", InsertKind::Digit);
                let g = self.corps.generateur();
                self.bouton_insert(ui, g, g, InsertKind::Digit); // 3φ, 2√2
                ui.end_row();

                self.bouton_insert(ui, "0", "0", InsertKind::Digit);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Backspace “intelligent” : retire d’un coup les motifs utiles ("inv(", "phi", "√2").
    fn backspace_entree(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        // Retire espaces finaux
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        // Retire motifs connus
        for pat in ["inv(", "sqrt2", "phi", "√2"] {
            if self.entree.ends_with(pat) {
                for _ in 0..pat.chars().count() {
                    self.entree.pop();
                }
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                return;
            }
        }

        // Sinon : un caractère
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("EXACT ({}, {}) :", self.corps.libelle(), self.format.libelle()));
        Self::champ_monospace(ui, "exact_out", &self.exact, 2);

        ui.add_space(6.0);

        ui.label("ΣLocal :");
        if self.lecture_dispo {
            Self::champ_monospace(ui, "socal_out", &self.lecture, 2);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(
                    ui,
                    "Triplet (a0, a1, d)",
                    "demarche_triplet",
                    &self.demarche.triplet,
                );
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn ui_serie(&mut self, ui: &mut egui::Ui) {
        ui.heading("Série dorée");

        ui.horizontal(|ui| {
            ui.label("Profondeur :");
            let mut p = self.serie.profondeur as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(0..=PROFONDEUR_MAX as u32),
            );
            if resp.changed() {
                self.set_profondeur(p as usize);
            }

            if ui.button("Calculer").clicked() {
                self.calcule_serie();
            }
        });

        if !self.serie.mot.is_empty() {
            Self::champ_demarche(ui, "Mot", "serie_mot", &self.serie.mot);
            let termes = self.serie.termes.join("\n");
            Self::champ_demarche(ui, "Sommes partielles", "serie_termes", &termes);
            ui.label(format!("{} terme(s)", self.serie.termes.len()));
        }
    }

    fn ui_symetrie(&mut self, ui: &mut egui::Ui) {
        ui.heading("Symétries icosaédriques");

        ui.horizontal(|ui| {
            ui.label("Rotation :");
            let mut i = self.symetrie.index as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut i)
                    .speed(1)
                    .range(0..=(NB_ROTATIONS - 1) as u32)
                    .suffix(format!(" / {NB_ROTATIONS}")),
            );
            if resp.changed() {
                self.set_rotation(i as usize);
                self.calcule_symetrie();
            }
            if ui.button("Afficher").clicked() {
                self.calcule_symetrie();
            }
        });

        if !self.symetrie.quaternion.is_empty() {
            Self::champ_demarche(ui, "q = [w, x, y, z]", "sym_q", &self.symetrie.quaternion);
            let images = self.symetrie.images.join("\n");
            Self::champ_demarche(ui, "Images de x, y, z", "sym_images", &images);
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
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
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() || to_insert.is_empty() {
            return;
        }

        match kind {
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::OpenParen | InsertKind::Func => {
                if !self.entree.is_empty() {
                    let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                    if let Some(c) = last {
                        if c.is_ascii_digit() || c.is_alphabetic() || c == ')' {
                            self.entree.push(' ');
                        }
                    }
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(to_insert);
            }
            InsertKind::Word => {
                // mots: espace si juste avant c’est un chiffre ou ')'
                if !self.entree.is_empty() && !self.entree.ends_with(char::is_whitespace) {
                    let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                    if let Some(c) = last {
                        if c.is_ascii_digit() || c == ')' {
                            self.entree.push(' ');
                        }
                    }
                }
                self.entree.push_str(to_insert);
            }
        }

        self.focus_entree = true;
    }

    /// Évalue l’expression dans le corps choisi, puis dépose EXACT/ΣLocal/Démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let s = self.entree.trim().to_string();

        let res = match self.corps {
            CorpsChoisi::Dore => evalue::<Golden>(&s, self.digits, self.format),
            CorpsChoisi::RacineDeux => evalue::<RootTwo>(&s, self.digits, self.format),
        };

        match res {
            Ok((exact, lecture, d_ui)) => {
                self.set_resultats(exact, lecture, d_ui);
            }
            Err(e) => {
                tracing::warn!(entree = %s, erreur = %e, "évaluation refusée");
                self.set_erreur(e.to_string());
            }
        }
        self.focus_entree = true;
    }

    fn calcule_serie(&mut self) {
        let p = self.serie.profondeur;
        let format = self.format;
        let termes = golden_series(p);

        self.serie.mot = format_symboles(&symbol_sequence(p));
        self.serie.termes = termes
            .iter()
            .zip(Golden::embedv(&termes))
            .map(|(t, f)| format!("{}  ≈ {f:.6}", format_element(t, format)))
            .collect();
    }

    fn calcule_symetrie(&mut self) {
        let qs = Golden::quaternions();
        let Some(q) = qs.get(self.symetrie.index) else {
            return;
        };

        self.symetrie.quaternion = format_quaternion(q, self.format);
        self.symetrie.images = (0..3)
            .filter_map(|axe| Golden::basis_vector(3, axe).ok())
            .map(|e| format_vecteur(&Golden::quat_transform(q, &e), self.format))
            .collect();
    }
}

/// Évaluation dans un corps donné, démarche convertie pour l’UI.
fn evalue<F: QuadraticField>(
    s: &str,
    digits: usize,
    format: FormatNombre,
) -> Result<(String, String, Demarche), ErreurNoyau> {
    let ev = eval_expression_format::<F>(s, digits, format)?;
    let d = ev.demarche;
    let d_ui = Demarche {
        jetons: d.jetons,
        rpn: d.rpn,
        triplet: d.triplet,
        note: d.note,
    };
    Ok((ev.exact, ev.lecture, d_ui))
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Word,
    Func,
    Op,
    OpenParen,
    CloseParen,
}
