// src/noyau/angles.rs
//
// Table des angles usuels sur [0, π]
// ----------------------------------
// - 9 angles : 0, π/6, π/4, π/3, π/2, 2π/3, 3π/4, 5π/6, π
// - sin/cos en flottants “exacts” (constantes, pas de calcul sin())
// - tan(π/2) = Indefini (sentinelle explicite, jamais une division)
// - Fonction : sin..cot (vitesse) + arcsin..arccot (inverses)

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI, SQRT_2};

/// √3 (f64::sqrt n’est pas const).
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

const R2_2: f64 = SQRT_2 / 2.0;
const R3_2: f64 = SQRT_3 / 2.0;
const R3_3: f64 = SQRT_3 / 3.0;

/// Valeur d’une fonction trig : fini ou indéfini (division par zéro).
///
/// `Indefini` est sa propre classe : égal à lui-même, jamais à un fini.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValeurTrig {
    Fini(f64),
    Indefini,
}

impl ValeurTrig {
    pub fn est_fini(self) -> bool {
        matches!(self, ValeurTrig::Fini(_))
    }

    /// Inverse multiplicatif : 1/0 -> Indefini ; 1/Indefini -> 0.
    pub fn inverse(self) -> ValeurTrig {
        match self {
            ValeurTrig::Fini(x) if x == 0.0 => ValeurTrig::Indefini,
            ValeurTrig::Fini(x) => ValeurTrig::Fini(1.0 / x),
            ValeurTrig::Indefini => ValeurTrig::Fini(0.0),
        }
    }
}

/// Un angle usuel et ses valeurs exactes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    pub radians: f64,
    pub sin: f64,
    pub cos: f64,
    pub tan: ValeurTrig,
}

const fn angle(radians: f64, sin: f64, cos: f64, tan: ValeurTrig) -> Angle {
    Angle {
        radians,
        sin,
        cos,
        tan,
    }
}

use ValeurTrig::{Fini, Indefini};

pub const ANGLES: [Angle; 9] = [
    angle(0.0, 0.0, 1.0, Fini(0.0)),
    angle(FRAC_PI_6, 0.5, R3_2, Fini(R3_3)),
    angle(FRAC_PI_4, R2_2, R2_2, Fini(1.0)),
    angle(FRAC_PI_3, R3_2, 0.5, Fini(SQRT_3)),
    angle(FRAC_PI_2, 1.0, 0.0, Indefini),
    angle(2.0 * PI / 3.0, R3_2, -0.5, Fini(-SQRT_3)),
    angle(3.0 * PI / 4.0, R2_2, -R2_2, Fini(-1.0)),
    angle(5.0 * PI / 6.0, 0.5, -R3_2, Fini(-R3_3)),
    angle(PI, 0.0, -1.0, Fini(0.0)),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Csc,
    Sec,
    Cot,
    Arcsin,
    Arccos,
    Arctan,
    Arcsec,
    Arccsc,
    Arccot,
}

impl Fonction {
    pub const DIRECTES: &'static [Fonction] = &[
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Csc,
        Fonction::Sec,
        Fonction::Cot,
    ];

    pub const INVERSES_BASE: &'static [Fonction] =
        &[Fonction::Arcsin, Fonction::Arccos, Fonction::Arctan];

    pub const INVERSES_ETENDUES: &'static [Fonction] = &[
        Fonction::Arcsin,
        Fonction::Arccos,
        Fonction::Arctan,
        Fonction::Arcsec,
        Fonction::Arccsc,
        Fonction::Arccot,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Csc => "csc",
            Fonction::Sec => "sec",
            Fonction::Cot => "cot",
            Fonction::Arcsin => "arcsin",
            Fonction::Arccos => "arccos",
            Fonction::Arctan => "arctan",
            Fonction::Arcsec => "arcsec",
            Fonction::Arccsc => "arccsc",
            Fonction::Arccot => "arccot",
        }
    }

    /// Valeur “directe” associée à l’angle.
    ///
    /// Pour une inverse, c’est l’argument présenté : arcsin -> sin(a),
    /// arcsec -> 1/cos(a), etc. (la réponse attendue est alors a).
    pub fn valeur(self, a: &Angle) -> ValeurTrig {
        match self {
            Fonction::Sin | Fonction::Arcsin => Fini(a.sin),
            Fonction::Cos | Fonction::Arccos => Fini(a.cos),
            Fonction::Tan | Fonction::Arctan => a.tan,
            Fonction::Csc | Fonction::Arccsc => Fini(a.sin).inverse(),
            Fonction::Sec | Fonction::Arcsec => Fini(a.cos).inverse(),
            Fonction::Cot | Fonction::Arccot => a.tan.inverse(),
        }
    }
}
