//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder UNE calculatrice (noyau) + les réglages purement visuels (thème).
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Calculatrice::apply`.
//! - Plusieurs AppCalc = plusieurs calculatrices indépendantes (pas d'état global).

use crate::config::Config;
use crate::noyau::{Action, Calculatrice, HistoriqueBorne};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // --- cosmétique ---
    pub theme_sombre: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppCalc {
    pub fn new(config: &Config) -> Self {
        Self {
            calc: Calculatrice::avec(
                config.reglages(),
                HistoriqueBorne::new(config.capacite_historique),
            ),
            theme_sombre: config.theme_sombre,
        }
    }

    /// Point d'entrée unique des boutons et du clavier.
    pub fn appuyer(&mut self, action: Action) {
        self.calc.apply(action);
    }

    pub fn basculer_theme(&mut self) {
        self.theme_sombre = !self.theme_sombre;
    }

    /// Efface la liste affichée (le calcul en cours n'est pas touché).
    pub fn vider_historique(&mut self) {
        self.calc.historique_mut().vider();
    }
}
