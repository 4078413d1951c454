// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la syntaxe au passage
// - Puis reconstruire Expr
//
// Règles:
// - Pas de multiplication implicite : "2(3)", "(1)(2)", "2 3" => erreur de syntaxe
// - Moins unaire (préfixe) : devient Tok::Neg (priorité maximale, associatif à droite)
// - Plus unaire : ignoré ("+2" == "2")
// - Imbrication bornée (anti-abus) : parenthèses ouvertes + moins unaires en attente
//   ("-(-(-1))" compte pour 5)

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok], profondeur_max: usize) -> Result<Vec<Tok>, ErreurEval> {
    if tokens.is_empty() {
        return Err(ErreurEval::Syntaxe("expression vide"));
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // true tant qu'on attend un opérande (début, après opérateur, après '(')
    let mut attend_valeur = true;
    // '(' ouvertes + Neg encore sur la pile ops
    let mut profondeur: usize = 0;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err(ErreurEval::Syntaxe("nombre inattendu"));
                }
                out.push(tok);
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurEval::Syntaxe("multiplication implicite non supportée"));
                }
                profondeur += 1;
                if profondeur > profondeur_max {
                    return Err(ErreurEval::TropComplexe("parenthèses trop imbriquées"));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(ErreurEval::Syntaxe("sous-expression vide ou incomplète"));
                }

                // dépile jusqu’à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        fermee = true;
                        break;
                    }
                    if matches!(top, Tok::Neg) {
                        profondeur -= 1;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(ErreurEval::Syntaxe("parenthèse fermante sans ouvrante"));
                }
                profondeur -= 1;
            }

            Tok::Plus | Tok::Minus if attend_valeur => {
                // opérateur préfixe : rien à dépiler (priorité maximale)
                if matches!(tok, Tok::Minus) {
                    profondeur += 1;
                    if profondeur > profondeur_max {
                        return Err(ErreurEval::TropComplexe("signes unaires trop nombreux"));
                    }
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if attend_valeur {
                    return Err(ErreurEval::Syntaxe("opérateur sans opérande"));
                }

                // gauche-associatif : on sort tout ce qui lie au moins autant
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        if matches!(op, Tok::Neg) {
                            profondeur -= 1;
                        }
                        out.push(op);
                    }
                }

                ops.push(tok);
                attend_valeur = true;
            }

            Tok::Neg => return Err(ErreurEval::Syntaxe("jeton interne inattendu")),
        }
    }

    if attend_valeur {
        return Err(ErreurEval::Syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::Syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st: Vec<Expr> = Vec::new();
    let invalide = ErreurEval::Syntaxe("expression invalide");

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(r) => st.push(Expr::Rat(r)),

            Tok::Neg => {
                let x = st.pop().ok_or(invalide.clone())?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = Box::new(st.pop().ok_or(invalide.clone())?);
                let a = Box::new(st.pop().ok_or(invalide.clone())?);

                st.push(match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    _ => Expr::Div(a, b),
                });
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::Syntaxe("parenthèse inattendue en RPN"))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        _ => Err(invalide),
    }
}
