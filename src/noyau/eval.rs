//! Noyau — évaluation sûre (pipeline réel)
//!
//! liste blanche -> jetons -> RPN -> Expr -> valeur exacte
//!
//! Aucune exécution de texte comme du code : la chaîne n'est jamais interprétée
//! autrement que par ce pipeline, et chaque étape est bornée (jetons, imbrication).

use num_rational::BigRational;

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize, verifier_caracteres};
use super::rpn::{from_rpn, to_rpn};

/// Plafonds absolus : l'arbre est évalué (et libéré) récursivement, sa hauteur
/// ne doit jamais dépasser ce que la pile d'un thread supporte.
pub const PROFONDEUR_PLAFOND: usize = 256;
pub const JETONS_PLAFOND: usize = 2048;

/// Bornes anti-abus de l'évaluateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    pub profondeur_max: usize,
    pub jetons_max: usize,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            profondeur_max: 64,
            jetons_max: 1024,
        }
    }
}

impl Limites {
    /// Ramène chaque borne dans [1, plafond].
    pub fn bornees(self) -> Self {
        Self {
            profondeur_max: self.profondeur_max.clamp(1, PROFONDEUR_PLAFOND),
            jetons_max: self.jetons_max.clamp(1, JETONS_PLAFOND),
        }
    }
}

/// API publique : évalue une expression arithmétique avec les bornes par défaut.
#[cfg(test)]
pub fn evaluate(texte: &str) -> Result<BigRational, ErreurEval> {
    evaluate_avec(texte, &Limites::default())
}

/// Même chose, bornes explicites (plafonnées, voir `Limites::bornees`).
pub fn evaluate_avec(texte: &str, limites: &Limites) -> Result<BigRational, ErreurEval> {
    let limites = limites.bornees();

    // 1) Liste blanche (avant tout, même si le reste ne se lit pas)
    verifier_caracteres(texte)?;

    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurEval::Syntaxe("expression vide"));
    }

    // 2) Jetons
    let jetons = tokenize(s, limites.jetons_max)?;

    // 3) RPN (validation syntaxique + profondeur)
    let rpn = to_rpn(&jetons, limites.profondeur_max)?;
    log::trace!("rpn: {}", format_tokens(&rpn));

    // 4) AST puis valeur
    let expr = from_rpn(&rpn)?;
    expr.eval()
}
