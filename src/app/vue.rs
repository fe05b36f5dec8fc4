// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Présentation pure : lit l’état, chaque bouton envoie UN événement.
//
// Pavé (4 colonnes) :
//   AC  --  ⌫  ÷
//   7   8   9  ×
//   4   5   6  −
//   1   2   3  +
//   0 (x2)  .  =

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Chiffre, Evenement, Operateur};

const TAILLE_BOUTON: egui::Vec2 = egui::vec2(72.0, 56.0);
const ESPACE: f32 = 8.0;

#[derive(Clone, Copy, Debug)]
enum Style {
    Chiffre,
    Operateur,
    Action,
    Egal,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("CALCULATRICE").small().weak());
            ui.add_space(6.0);

            self.ui_ecran(ui);

            ui.add_space(10.0);

            self.ui_pave(ui);
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let etat = self.etat();
        let largeur = 4.0 * TAILLE_BOUTON.x + 3.0 * ESPACE;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_width(largeur);
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Historique (peut être vide : on réserve la ligne)
                    let historique = if etat.historique.is_empty() {
                        " "
                    } else {
                        etat.historique.as_str()
                    };
                    ui.label(egui::RichText::new(historique).small().weak());

                    let principal = if etat.en_erreur() {
                        egui::RichText::new(etat.affichage())
                            .size(22.0)
                            .color(ui.visuals().error_fg_color)
                    } else {
                        egui::RichText::new(etat.affichage())
                            .size(44.0)
                            .strong()
                    };
                    ui.add(egui::Label::new(principal.monospace()).wrap());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(ui, "AC", Style::Action, Evenement::Effacer);
            ui.add_space(TAILLE_BOUTON.x);
            self.bouton(ui, "⌫", Style::Operateur, Evenement::Supprimer);
            self.bouton_operateur(ui, Operateur::Divise);
        });

        for (ligne, op) in [
            (['7', '8', '9'], Operateur::Fois),
            (['4', '5', '6'], Operateur::Moins),
            (['1', '2', '3'], Operateur::Plus),
        ] {
            ui.horizontal(|ui| {
                for c in ligne {
                    self.bouton_chiffre(ui, c);
                }
                self.bouton_operateur(ui, op);
            });
        }

        ui.horizontal(|ui| {
            let double = egui::vec2(2.0 * TAILLE_BOUTON.x + ESPACE, TAILLE_BOUTON.y);
            self.bouton_taille(ui, "0", Style::Chiffre, double, evenement_chiffre('0'));
            self.bouton(ui, ".", Style::Chiffre, Evenement::Chiffre(Chiffre::POINT));
            self.bouton(ui, "=", Style::Egal, Evenement::Egal);
        });
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        let label = c.to_string();
        self.bouton(ui, &label, Style::Chiffre, evenement_chiffre(c));
    }

    fn bouton_operateur(&mut self, ui: &mut egui::Ui, op: Operateur) {
        self.bouton(ui, op.symbole(), Style::Operateur, Evenement::Operateur(op));
    }

    fn bouton(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        style: Style,
        ev: impl Into<Option<Evenement>>,
    ) {
        self.bouton_taille(ui, label, style, TAILLE_BOUTON, ev);
    }

    fn bouton_taille(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        style: Style,
        taille: egui::Vec2,
        ev: impl Into<Option<Evenement>>,
    ) {
        let v = ui.visuals();
        let (fond, texte) = match style {
            Style::Chiffre => (v.widgets.inactive.weak_bg_fill, v.text_color()),
            Style::Operateur => (v.faint_bg_color, v.hyperlink_color),
            Style::Action => (v.faint_bg_color, v.error_fg_color),
            Style::Egal => (v.selection.bg_fill, v.strong_text_color()),
        };

        let bouton = egui::Button::new(egui::RichText::new(label).size(22.0).color(texte))
            .fill(fond)
            .corner_radius(12.0);

        if ui.add_sized(taille, bouton).clicked() {
            if let Some(ev) = ev.into() {
                self.envoyer(ev);
            }
        }
    }
}

fn evenement_chiffre(c: char) -> Option<Evenement> {
    Chiffre::nouveau(c).map(Evenement::Chiffre)
}
