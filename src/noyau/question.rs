// src/noyau/question.rs
//
// Générateur de questions
// -----------------------
// - Inverse : arcsin(…)…arccot(…) -> réponse = angle (radians)
// - Vitesse : sin(…)…cot(…)       -> réponse = valeur trig
// - Même forme d’algorithme : tirage (fonction, angle) uniforme,
//   retirage borné jusqu’à valeur finie (selon Retirage), repli déterministe.

use rand::Rng;
use tracing::{debug, warn};

use super::angles::{Angle, Fonction, ValeurTrig, ANGLES};
use super::format::{format_radians, format_valeur};
use super::reglages::{JeuInverses, Reglages, Retirage};

/// Les deux modes de quiz (états totalement indépendants).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Trig inverse : on répond un angle (π/3, 3π/4…).
    Inverse,
    /// Trig “vitesse” : on répond une valeur (√3/2, 2, ∞…).
    Vitesse,
}

impl Mode {
    pub fn titre(self) -> &'static str {
        match self {
            Mode::Inverse => "Trig inverse",
            Mode::Vitesse => "Trig vitesse",
        }
    }
}

/// Question générée : jamais modifiée après création.
#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub mode: Mode,
    pub fonction: Fonction,
    pub angle: Angle,
    /// Ce qui est entre parenthèses : valeur (inverse) ou angle (vitesse).
    pub argument: ValeurTrig,
    /// Réponse exacte stockée : angle en radians (inverse) ou valeur (vitesse).
    pub reponse: ValeurTrig,
    pub reponse_affichee: String,
    /// Ex: "arcsin(1/2)", "sec(π/3)".
    pub enonce: String,
}

/// Génère une question pour le mode donné.
pub fn generer_question<R: Rng + ?Sized>(mode: Mode, reglages: &Reglages, rng: &mut R) -> Question {
    let (fonctions, retirage, repli): (&[Fonction], Retirage, Fonction) = match mode {
        Mode::Inverse => {
            let jeu: &[Fonction] = match reglages.inverses {
                JeuInverses::Base => Fonction::INVERSES_BASE,
                JeuInverses::Etendu => Fonction::INVERSES_ETENDUES,
            };
            (jeu, reglages.retirage_inverse, Fonction::Arcsin)
        }
        Mode::Vitesse => (Fonction::DIRECTES, reglages.retirage_vitesse, Fonction::Sin),
    };

    let (fonction, angle) = tirer(fonctions, retirage, repli, rng);
    construire(mode, fonction, angle)
}

/// Tirage (fonction, angle) selon la politique de retirage.
fn tirer<R: Rng + ?Sized>(
    fonctions: &[Fonction],
    retirage: Retirage,
    repli: Fonction,
    rng: &mut R,
) -> (Fonction, Angle) {
    let essais = match retirage {
        Retirage::JusquaFini { essais_max } => essais_max.max(1),
        Retirage::Aucun => 1,
    };

    let mut tirage = tirage_uniforme(fonctions, rng);
    let mut n = 1;
    while !tirage.0.valeur(&tirage.1).est_fini() && n < essais {
        tirage = tirage_uniforme(fonctions, rng);
        n += 1;
    }

    let (fonction, angle) = tirage;
    if matches!(retirage, Retirage::JusquaFini { .. }) && !fonction.valeur(&angle).est_fini() {
        warn!(
            essais = n,
            fonction = fonction.nom(),
            "retirage épuisé, repli sur {}",
            repli.nom()
        );
        return (repli, angle);
    }

    (fonction, angle)
}

fn tirage_uniforme<R: Rng + ?Sized>(fonctions: &[Fonction], rng: &mut R) -> (Fonction, Angle) {
    let f = fonctions[rng.random_range(0..fonctions.len())];
    let a = ANGLES[rng.random_range(0..ANGLES.len())];
    (f, a)
}

/// Assemble la question (énoncé + réponse exacte) pour un couple tiré.
pub fn construire(mode: Mode, fonction: Fonction, angle: Angle) -> Question {
    let valeur = fonction.valeur(&angle);
    let radians = ValeurTrig::Fini(angle.radians);

    let q = match mode {
        Mode::Inverse => Question {
            mode,
            fonction,
            angle,
            argument: valeur,
            reponse: radians,
            reponse_affichee: format_radians(angle.radians),
            enonce: format!("{}({})", fonction.nom(), format_valeur(valeur)),
        },
        Mode::Vitesse => Question {
            mode,
            fonction,
            angle,
            argument: radians,
            reponse: valeur,
            reponse_affichee: format_valeur(valeur),
            enonce: format!("{}({})", fonction.nom(), format_radians(angle.radians)),
        },
    };

    debug!(enonce = %q.enonce, reponse = %q.reponse_affichee, "question générée");
    q
}
