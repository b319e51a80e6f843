// src/noyau/notation.rs
//
// Notation avec tolérance
// -----------------------
// - Indefini / Indefini      -> juste
// - fini / fini              -> juste ssi |u - c| < ε (strict)
// - tout autre couple        -> faux (y compris réponse illisible)

use tracing::debug;

use super::angles::ValeurTrig;
use super::lecture::ErreurLecture;
use super::question::{Mode, Question};

/// ε pour les réponses en radians (mode inverse).
pub const TOLERANCE_ANGLE: f64 = 0.001;

/// ε pour les valeurs trig (mode vitesse).
pub const TOLERANCE_VALEUR: f64 = 0.01;

impl Mode {
    pub fn tolerance(self) -> f64 {
        match self {
            Mode::Inverse => TOLERANCE_ANGLE,
            Mode::Vitesse => TOLERANCE_VALEUR,
        }
    }
}

/// Comparaison brute de deux valeurs (symétrique).
pub fn equivalentes(u: ValeurTrig, c: ValeurTrig, epsilon: f64) -> bool {
    match (u, c) {
        (ValeurTrig::Indefini, ValeurTrig::Indefini) => true,
        (ValeurTrig::Fini(u), ValeurTrig::Fini(c)) => (u - c).abs() < epsilon,
        _ => false,
    }
}

/// Note une réponse déjà lue contre la réponse exacte de la question.
pub fn noter(mode: Mode, lu: &Result<ValeurTrig, ErreurLecture>, question: &Question) -> bool {
    let juste = match lu {
        Ok(u) => equivalentes(*u, question.reponse, mode.tolerance()),
        Err(_) => false,
    };

    debug!(
        enonce = %question.enonce,
        lu = ?lu,
        juste,
        "réponse notée"
    );
    juste
}
