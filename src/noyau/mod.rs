//! Noyau pur du quiz trig
//!
//! Organisation interne :
//! - angles.rs    : table des 9 angles usuels + ValeurTrig (fini / indéfini)
//! - fraction.rs  : fraction continue (décimal -> p/q)
//! - format.rs    : affichage EXACT “joli” (√2/2, 2√3/3, 3π/4, ∞…)
//! - jetons.rs    : tokenisation des réponses
//! - lecture.rs   : parse_pi / parse_sqrt
//! - question.rs  : générateur (retirage jusqu’à valeur finie)
//! - notation.rs  : comparaison avec tolérance
//! - minuteur.rs  : tic d’une seconde annulable
//! - session.rs   : partie (score, compteur, temps, historique)
//! - reglages.rs  : constantes et politiques

pub mod angles;
pub mod format;
pub mod fraction;
pub mod jetons;
pub mod lecture;
pub mod minuteur;
pub mod notation;
pub mod question;
pub mod reglages;
pub mod session;

#[cfg(test)]
mod tests_scientifiques;


#[cfg(test)]
mod tests_session;

// API utilisée par l’application
pub use question::Mode;
pub use reglages::Reglages;
pub use session::{Phase, SessionQuiz, Soumission, Verdict};
