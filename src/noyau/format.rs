// src/noyau/format.rs
//
// Affichage EXACT “joli”
// ----------------------
// - format_radians : multiple de π (π/2, 2π/3, -π, …)
// - format_valeur  : table fixe √2/2, √3/3, 2√3/3, … puis fraction continue
// - ∞ pour tout non fini / Indefini

use std::f64::consts::{PI, SQRT_2};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::angles::{ValeurTrig, SQRT_3};
use super::fraction::{en_fraction, rationaliser};

/// Symbole affiché pour l’infini / indéfini.
pub const INFINI: &str = "∞";

/// Tolérance de reconnaissance des constantes exactes.
const TOLERANCE_CONSTANTE: f64 = 1e-10;

/* ------------------------ π “joli” ------------------------ */

/// coeff*π : affichage joli (π/2, 3π/2, -2π, etc.)
pub fn format_coeff_pi(coeff: &BigRational) -> String {
    let n = coeff.numer();
    let d = coeff.denom();

    if coeff.is_zero() {
        return "0".to_string();
    }

    let un = BigInt::one();
    let moins_un = BigInt::from(-1);

    // ±π, kπ
    if d.is_one() {
        return if n == &un {
            "π".to_string()
        } else if n == &moins_un {
            "-π".to_string()
        } else {
            format!("{n}π")
        };
    }

    // ±π/d
    if n == &un {
        return format!("π/{d}");
    }
    if n == &moins_un {
        return format!("-π/{d}");
    }

    // kπ/d
    format!("{n}π/{d}")
}

/// Angle en radians -> texte exact relatif à π.
pub fn format_radians(rad: f64) -> String {
    if !rad.is_finite() {
        return INFINI.to_string();
    }
    if rad == 0.0 {
        return "0".to_string();
    }
    if rad == PI {
        return "π".to_string();
    }

    match rationaliser(rad / PI) {
        Some(coeff) => format_coeff_pi(&coeff),
        None => INFINI.to_string(),
    }
}

/* ------------------------ Valeurs trig ------------------------ */

/// Constantes exactes reconnues, dans l’ordre de test.
fn constantes() -> [(f64, &'static str); 19] {
    let r2_2 = SQRT_2 / 2.0;
    let r3_2 = SQRT_3 / 2.0;
    let r3_3 = SQRT_3 / 3.0;
    let deux_r3_3 = 2.0 / SQRT_3;

    [
        (0.0, "0"),
        (1.0, "1"),
        (-1.0, "-1"),
        (2.0, "2"),
        (-2.0, "-2"),
        (0.5, "1/2"),
        (-0.5, "-1/2"),
        (r2_2, "√2/2"),
        (-r2_2, "-√2/2"),
        (r3_2, "√3/2"),
        (-r3_2, "-√3/2"),
        (r3_3, "√3/3"),
        (-r3_3, "-√3/3"),
        (SQRT_2, "√2"),
        (-SQRT_2, "-√2"),
        (SQRT_3, "√3"),
        (-SQRT_3, "-√3"),
        (deux_r3_3, "2√3/3"),
        (-deux_r3_3, "-2√3/3"),
    ]
}

/// Valeur trig -> forme exacte (table fixe, sinon fraction continue).
pub fn format_valeur(v: ValeurTrig) -> String {
    match v {
        ValeurTrig::Indefini => INFINI.to_string(),
        ValeurTrig::Fini(x) => format_flottant(x),
    }
}

/// Même chose sur un f64 brut (∞ si non fini).
pub fn format_flottant(x: f64) -> String {
    if !x.is_finite() {
        return INFINI.to_string();
    }

    constantes()
        .iter()
        .find(|(c, _)| (x - c).abs() < TOLERANCE_CONSTANTE)
        .map(|(_, txt)| (*txt).to_string())
        .unwrap_or_else(|| en_fraction(x))
}
