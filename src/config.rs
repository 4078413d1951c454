//! Configuration (fichier TOML optionnel).
//!
//! Toutes les clés sont facultatives : une clé absente garde sa valeur par défaut.
//!
//! ```toml
//! capacite_historique = 10
//! chiffres = 12
//! profondeur_max = 64
//! jetons_max = 1024
//! jeton_erreur = "Error"
//! theme_sombre = false
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::noyau::historique::CAPACITE_DEFAUT;
use crate::noyau::{Limites, Reglages};

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const CHIFFRES_MAX: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub capacite_historique: usize,
    pub chiffres: usize,
    pub profondeur_max: usize,
    pub jetons_max: usize,
    pub jeton_erreur: String,
    pub theme_sombre: bool,
}

impl Default for Config {
    fn default() -> Self {
        let reglages = Reglages::default();
        Self {
            capacite_historique: CAPACITE_DEFAUT,
            chiffres: reglages.chiffres,
            profondeur_max: reglages.limites.profondeur_max,
            jetons_max: reglages.limites.jetons_max,
            jeton_erreur: reglages.jeton_erreur,
            theme_sombre: false,
        }
    }
}

impl Config {
    pub fn depuis_toml(texte: &str) -> Result<Self> {
        let config: Config = toml::from_str(texte).context("configuration TOML invalide")?;
        Ok(config)
    }

    /// Charge un fichier de configuration (natif seulement).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger(path: &std::path::Path) -> Result<Self> {
        let texte = std::fs::read_to_string(path)
            .with_context(|| format!("lecture impossible: {}", path.display()))?;
        Self::depuis_toml(&texte).with_context(|| format!("fichier: {}", path.display()))
    }

    /// Réglages du noyau, bornes appliquées.
    pub fn reglages(&self) -> Reglages {
        Reglages {
            chiffres: self.chiffres.min(CHIFFRES_MAX),
            limites: Limites {
                profondeur_max: self.profondeur_max,
                jetons_max: self.jetons_max,
            }
            .bornees(),
            jeton_erreur: self.jeton_erreur.clone(),
        }
    }
}
