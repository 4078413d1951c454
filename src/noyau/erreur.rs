// src/noyau/erreur.rs
//
// Erreurs d'évaluation (typées).
// La machine à états les rattrape toutes : l'utilisateur ne voit qu'un jeton d'erreur,
// mais le détail reste disponible pour le journal et les tests.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Caractère hors de l'ensemble accepté `[0-9+-*/.() ]`.
    #[error("caractère inattendu: '{0}'")]
    CaractereInvalide(char),

    /// Expression mal formée (opérateur final, parenthèses, nombre invalide…).
    #[error("syntaxe: {0}")]
    Syntaxe(&'static str),

    #[error("division par zéro")]
    DivisionParZero,

    /// Garde-fou anti-abus : profondeur ou taille dépassée.
    #[error("expression trop complexe: {0}")]
    TropComplexe(&'static str),
}

#[cfg(test)]
impl ErreurEval {
    pub fn est_syntaxe(&self) -> bool {
        matches!(self, ErreurEval::Syntaxe(_))
    }
}
