// src/noyau/expr.rs
//
// AST exact (sans flottants).
// - Rat : rationnel exact (les décimaux saisis sont convertis sans perte)
// - Neg : moins unaire
// - Add/Sub/Mul/Div : opérations binaires
//
// La profondeur de l'arbre est bornée en amont (nombre de jetons + imbrication),
// donc l'évaluation récursive reste sûre.

use num_rational::BigRational;
use num_traits::Zero;

use std::fmt;

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Rat(BigRational),

    Neg(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évalue l'arbre en rationnel exact.
    /// Division par un zéro (même calculé, ex: 1/(2-2)) => DivisionParZero.
    pub fn eval(&self) -> Result<BigRational, ErreurEval> {
        use Expr::*;

        match self {
            Rat(r) => Ok(r.clone()),
            Neg(x) => Ok(-x.eval()?),
            Add(a, b) => Ok(a.eval()? + b.eval()?),
            Sub(a, b) => Ok(a.eval()? - b.eval()?),
            Mul(a, b) => Ok(a.eval()? * b.eval()?),
            Div(a, b) => {
                let num = a.eval()?;
                let den = b.eval()?;
                if den.is_zero() {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(num / den)
            }
        }
    }
}

/// Affichage parenthésé complet (journal / tests) : "(2 + (3 * 4))".
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Rat(r) => write!(f, "{r}"),
            Neg(x) => write!(f, "-{x}"),
            Add(a, b) => write!(f, "({a} + {b})"),
            Sub(a, b) => write!(f, "({a} - {b})"),
            Mul(a, b) => write!(f, "({a} * {b})"),
            Div(a, b) => write!(f, "({a} / {b})"),
        }
    }
}
