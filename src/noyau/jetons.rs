// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,

    // Moins unaire : jamais émis par tokenize(), produit par to_rpn().
    Neg,
}

/// Ensemble accepté (liste blanche) : chiffres, point, + - * / ( ) et espace.
pub fn caractere_accepte(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')' | ' ')
}

/// Vérifie la liste blanche AVANT toute analyse.
/// Premier caractère fautif => erreur, même si le reste serait valide.
pub fn verifier_caracteres(s: &str) -> Result<(), ErreurEval> {
    match s.chars().find(|&c| !caractere_accepte(c)) {
        Some(c) => Err(ErreurEval::CaractereInvalide(c)),
        None => Ok(()),
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12)
/// - décimaux (ex: 1.25, .5, 5.) -> Num exact (1.25 = 5/4)
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// "++" et "--" collés sont refusés (incrément/décrément, pas deux signes) ;
/// "+-", "-+", "*-" restent valides.
///
/// `max_jetons` borne la taille de la sortie (anti-gel).
pub fn tokenize(s: &str, max_jetons: usize) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        if out.len() >= max_jetons {
            return Err(ErreurEval::TropComplexe("trop de jetons"));
        }

        let c = chars[i];

        if c == ' ' {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = tok {
            if matches!(t, Tok::Plus | Tok::Minus) && i > 0 && chars[i - 1] == c {
                return Err(ErreurEval::Syntaxe("signe doublé"));
            }
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : partie entière, point optionnel, partie décimale
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let entier: String = chars[start..i].iter().collect();

            let mut decimales = String::new();
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                let start_d = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                decimales = chars[start_d..i].iter().collect();

                // "1.2.3" : second point collé
                if i < chars.len() && chars[i] == '.' {
                    return Err(ErreurEval::Syntaxe("nombre invalide"));
                }
            }

            if entier.is_empty() && decimales.is_empty() {
                return Err(ErreurEval::Syntaxe("point isolé"));
            }

            out.push(Tok::Num(decimal_exact(&entier, &decimales)?));
            continue;
        }

        // inatteignable si verifier_caracteres() a été appelé, mais on reste strict
        return Err(ErreurEval::CaractereInvalide(c));
    }

    Ok(out)
}

/// "12" + "34" -> 1234/100 (exact, sans flottant).
fn decimal_exact(entier: &str, decimales: &str) -> Result<BigRational, ErreurEval> {
    let chiffres = format!("{entier}{decimales}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or(ErreurEval::Syntaxe("nombre invalide"))?;

    if decimales.is_empty() {
        return Ok(BigRational::from_integer(n));
    }

    let d = BigInt::from(10).pow(decimales.len() as u32);
    Ok(BigRational::new(n, d))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(r) => format_rat(r),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Neg => "neg".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
