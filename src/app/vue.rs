// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Chaque bouton produit exactement UNE Action (aucune logique ici)
// - Historique : plus récent en tête, "expr = résultat"
// - Bouton thème clair/sombre

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Action, Etat, Operateur};

/// Pavé : (libellé, action). Une ligne = une rangée de la grille.
const PAVE: [[(&str, Action); 4]; 5] = [
    [
        ("C", Action::Effacer),
        ("DEL", Action::Supprimer),
        ("(", Action::Operateur(Operateur::ParenOuvrante)),
        (")", Action::Operateur(Operateur::ParenFermante)),
    ],
    [
        ("7", Action::Chiffre(7)),
        ("8", Action::Chiffre(8)),
        ("9", Action::Chiffre(9)),
        ("/", Action::Operateur(Operateur::Divise)),
    ],
    [
        ("4", Action::Chiffre(4)),
        ("5", Action::Chiffre(5)),
        ("6", Action::Chiffre(6)),
        ("*", Action::Operateur(Operateur::Fois)),
    ],
    [
        ("1", Action::Chiffre(1)),
        ("2", Action::Chiffre(2)),
        ("3", Action::Chiffre(3)),
        ("-", Action::Operateur(Operateur::Moins)),
    ],
    [
        ("0", Action::Chiffre(0)),
        (".", Action::Decimal),
        ("=", Action::Evaluer),
        ("+", Action::Operateur(Operateur::Plus)),
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.heading("Calculatrice");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let libelle = if self.theme_sombre { "Clair" } else { "Sombre" };
                if ui.button(libelle).on_hover_text("Thème clair/sombre").clicked() {
                    self.basculer_theme();
                }
            });
        });
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);
        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_historique(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                let mut texte = egui::RichText::new(self.calc.affichage())
                    .monospace()
                    .size(32.0);
                if self.calc.etat() == Etat::Erreur {
                    texte = texte.color(ui.visuals().error_fg_color);
                } else if self.calc.etat() == Etat::ResultatAffiche {
                    texte = texte.strong();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(texte);
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for (libelle, action) in rangee {
                        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(libelle));
                        if resp.clicked() {
                            self.appuyer(action);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let historique = self.calc.historique();
        let titre = format!("Historique ({}/{}) :", historique.len(), historique.capacite());

        ui.horizontal(|ui| {
            ui.label(titre);
            if ui
                .small_button("vider")
                .on_hover_text("Efface la liste (pas le calcul en cours)")
                .clicked()
            {
                self.vider_historique();
            }
        });

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if self.calc.historique().is_empty() {
                    ui.weak("(vide)");
                }
                for entree in self.calc.historique().iter() {
                    ui.horizontal(|ui| {
                        ui.monospace(entree.expression());
                        ui.monospace("=");
                        ui.label(egui::RichText::new(entree.resultat()).monospace().strong());
                    });
                }
            });
    }
}
