// src/noyau/format.rs
//
// Rationnel exact -> texte décimal pour l'affichage (et le tampon).
// Règle unique :
// - entier => "n" (jamais de ".0")
// - sinon => troncature à `chiffres` décimales, zéros finaux retirés
// - jamais de "-0"
//
// Le texte produit ne contient que des caractères de l'ensemble accepté,
// il peut donc être réinjecté tel quel dans le tampon (calcul enchaîné).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 || frac_part.is_zero() {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    format!("{signe}{int_part}.{frac}")
}

/// Stringification du résultat (affichage + historique + tampon).
pub fn format_resultat(r: &BigRational, chiffres: usize) -> String {
    if r.is_integer() {
        return r.numer().to_string();
    }

    // troncature vers zéro : (n * 10^k) / d
    let scaled = (r.numer() * pow10(chiffres)) / r.denom();
    scaled_to_decimal(scaled, chiffres)
}
