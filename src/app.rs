// src/app.rs
//
// Calculatrice — module App (racine)
// ---------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier -> Action (même chemin que les boutons)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Action;

/// Traduit les événements clavier de la frame en actions, dans l'ordre reçu.
/// - texte tapé : chiffres, '.', ',', opérateurs, '='
/// - Entrée = évaluer, Retour arrière = supprimer, Échap = effacer
fn actions_clavier(events: &[egui::Event]) -> Vec<Action> {
    let mut out = Vec::new();

    for ev in events {
        match ev {
            egui::Event::Text(texte) => {
                out.extend(texte.chars().filter_map(Action::depuis_touche));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Action::Evaluer),
                egui::Key::Backspace => out.push(Action::Supprimer),
                egui::Key::Escape => out.push(Action::Effacer),
                _ => {}
            },
            _ => {}
        }
    }

    out
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_theme(if self.theme_sombre {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });

        // Pas de champ texte : le clavier ne peut pas être "volé" par un focus.
        let actions = ctx.input(|i| actions_clavier(&i.events));
        for action in actions {
            self.appuyer(action);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
