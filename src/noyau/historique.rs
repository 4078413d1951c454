// src/noyau/historique.rs
//
// Historique des calculs réussis.
// - EntreeHistorique : immuable une fois créée
// - PuitsHistorique  : ce que la machine à états connaît (append seulement)
// - HistoriqueBorne  : liste ordonnée, plus récent en tête, capacité fixe

use std::collections::VecDeque;
use std::fmt;

/// Capacité par défaut de l'historique affiché.
pub const CAPACITE_DEFAUT: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    expression: String,
    resultat: String,
}

impl EntreeHistorique {
    pub fn new(expression: impl Into<String>, resultat: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            resultat: resultat.into(),
        }
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn resultat(&self) -> &str {
        &self.resultat
    }
}

/// Ligne affichée : "2+3 = 5".
impl fmt::Display for EntreeHistorique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.resultat)
    }
}

/// Puits d'historique : reçoit les entrées, décide seul de l'éviction.
pub trait PuitsHistorique {
    fn append(&mut self, entree: EntreeHistorique);
}

/// Un simple Vec (ordre d'arrivée, sans borne) : utile pour les tests.
impl PuitsHistorique for Vec<EntreeHistorique> {
    fn append(&mut self, entree: EntreeHistorique) {
        self.push(entree);
    }
}

#[derive(Clone, Debug)]
pub struct HistoriqueBorne {
    entrees: VecDeque<EntreeHistorique>,
    capacite: usize,
}

impl Default for HistoriqueBorne {
    fn default() -> Self {
        Self::new(CAPACITE_DEFAUT)
    }
}

impl HistoriqueBorne {
    /// Capacité 0 ramenée à 1 (un historique qui n'accepte rien n'a pas de sens).
    pub fn new(capacite: usize) -> Self {
        let capacite = capacite.max(1);
        Self {
            entrees: VecDeque::with_capacity(capacite + 1),
            capacite,
        }
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    /// Plus récent d'abord.
    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }
}

impl PuitsHistorique for HistoriqueBorne {
    fn append(&mut self, entree: EntreeHistorique) {
        log::info!("historique: {entree}");
        self.entrees.push_front(entree);

        // éviction du plus ancien (en queue)
        while self.entrees.len() > self.capacite {
            if let Some(vieille) = self.entrees.pop_back() {
                log::debug!("historique plein, éviction: {vieille}");
            }
        }
    }
}
