// src/noyau/format.rs
//
// Arrondi des résultats + texte canonique d’un nombre.
//
// L’arrondi passe par un rationnel exact (la valeur binaire réelle du f64),
// donc pas de double arrondi : 0.1 + 0.2 -> 0.3, 1.005 reste 1.005.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Décimales conservées sur un résultat.
pub const DECIMALES: usize = 8;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal (digits fixes).
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;
    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// Arrondit à `DECIMALES` (demi loin de zéro). Non-fini : renvoyé tel quel.
pub fn arrondir(x: f64) -> f64 {
    let Some(r) = BigRational::from_float(x) else {
        return x;
    };

    let scaled = (r * BigRational::from_integer(pow10(DECIMALES)))
        .round()
        .to_integer();

    if scaled.is_zero() {
        return 0.0;
    }

    scaled_to_decimal(scaled, DECIMALES)
        .parse::<f64>()
        .unwrap_or(x)
}

/// Texte canonique : sans exposant, sans zéros de queue, "-0" => "0".
pub fn format_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}
