//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - machine.rs    : tampon d'expression + machine à états (Action -> affichage)
//! - historique.rs : entrées immuables + puits borné (10 par défaut)
//! - eval.rs       : pipeline d'évaluation sûr (liste blanche + bornes)
//! - jetons.rs     : tokenisation (décimaux exacts)
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : AST exact + évaluation
//! - format.rs     : rationnel -> texte affiché
//! - erreur.rs     : erreurs typées

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod machine;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale (ce que l'UI et la config consomment)
pub use eval::Limites;
pub use historique::HistoriqueBorne;
pub use machine::{Action, Calculatrice, Etat, Operateur, Reglages};
