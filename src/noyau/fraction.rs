// src/noyau/fraction.rs
//
// Fraction continue : décimal -> p/q
// ----------------------------------
// - Réduites h/k accumulées en BigInt (aucun débordement)
// - Arrêt : |d - h/k| < 1e-8, terme suivant non fini, ou 50 étapes
// - La première réduite qui passe la tolérance a le plus petit dénominateur

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

/// Tolérance d’arrêt sur |d - p/q|.
pub const TOLERANCE_FRACTION: f64 = 1e-8;

/// Nombre maximal de termes de l’expansion.
pub const ETAPES_MAX: usize = 50;

/// Meilleure fraction “petite” pour `d`. None si `d` n’est pas fini.
pub fn rationaliser(d: f64) -> Option<BigRational> {
    if !d.is_finite() {
        return None;
    }

    // h(-1)=1, h(-2)=0 ; k(-1)=0, k(-2)=1
    let (mut h1, mut h2) = (BigInt::one(), BigInt::zero());
    let (mut k1, mut k2) = (BigInt::zero(), BigInt::one());
    let mut b = d;

    for _ in 0..ETAPES_MAX {
        let a_f = b.floor();
        let a = BigInt::from_f64(a_f)?;

        let h = &a * &h1 + &h2;
        h2 = std::mem::replace(&mut h1, h);
        let k = &a * &k1 + &k2;
        k2 = std::mem::replace(&mut k1, k);

        let approx = ratio_f64(&h1, &k1);
        if (d - approx).abs() < TOLERANCE_FRACTION {
            break;
        }

        b = 1.0 / (b - a_f);
        if !b.is_finite() {
            break;
        }
    }

    // k1 ≥ 1 dès la première étape (k = a*0 + 1)
    Some(BigRational::new(h1, k1))
}

/// Rendu texte : "p" si q = 1, sinon "p/q".
pub fn format_rat_pretty(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Raccourci : rationaliser puis formater (∞ si non fini).
pub fn en_fraction(d: f64) -> String {
    match rationaliser(d) {
        Some(r) => format_rat_pretty(&r),
        None => "∞".to_string(),
    }
}

fn ratio_f64(h: &BigInt, k: &BigInt) -> f64 {
    match (h.to_f64(), k.to_f64()) {
        (Some(h), Some(k)) => h / k,
        _ => f64::NAN,
    }
}
