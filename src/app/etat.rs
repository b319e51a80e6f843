//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir les deux parties (inverse + vitesse), le texte tapé dans
//! chaque onglet et le générateur aléatoire ; relayer les actions vers le
//! noyau sans logique d’affichage.
//!
//! Contrats :
//! - Aucune notation ici (tout passe par SessionQuiz).
//! - Les deux modes ne partagent aucun état mutable (sauf le RNG, qui ne
//!   porte aucune information de partie).

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::noyau::{Mode, Reglages, SessionQuiz, Soumission};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Onglet {
    Inverse,
    Vitesse,
}

impl Onglet {
    pub fn mode(self) -> Mode {
        match self {
            Onglet::Inverse => Mode::Inverse,
            Onglet::Vitesse => Mode::Vitesse,
        }
    }
}

/// Un onglet de quiz : sa partie + son champ de saisie.
#[derive(Clone, Debug)]
pub struct PanneauQuiz {
    pub session: SessionQuiz,
    pub saisie: String,

    // Permet à vue.rs de redonner le focus au champ après un clic.
    pub focus_saisie: bool,
}

impl PanneauQuiz {
    fn new(mode: Mode, reglages: Reglages) -> Self {
        Self {
            session: SessionQuiz::nouvelle(mode, reglages),
            saisie: String::new(),
            focus_saisie: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppQuiz {
    pub onglet: Onglet,
    pub inverse: PanneauQuiz,
    pub vitesse: PanneauQuiz,
    rng: StdRng,
}

impl Default for AppQuiz {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppQuiz {
    pub fn new(reglages: Reglages) -> Self {
        Self::avec_rng(reglages, StdRng::from_os_rng())
    }

    pub fn avec_rng(reglages: Reglages, rng: StdRng) -> Self {
        Self {
            onglet: Onglet::Inverse,
            inverse: PanneauQuiz::new(Mode::Inverse, reglages),
            vitesse: PanneauQuiz::new(Mode::Vitesse, reglages),
            rng,
        }
    }

    pub fn panneau_mut(&mut self, mode: Mode) -> &mut PanneauQuiz {
        self.parties(mode).0
    }

    /// Emprunts disjoints : panneau du mode + RNG.
    fn parties(&mut self, mode: Mode) -> (&mut PanneauQuiz, &mut StdRng) {
        let p = match mode {
            Mode::Inverse => &mut self.inverse,
            Mode::Vitesse => &mut self.vitesse,
        };
        (p, &mut self.rng)
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Commencer / Recommencer.
    pub fn demarrer(&mut self, mode: Mode, maintenant: f64) {
        let (p, rng) = self.parties(mode);
        p.saisie.clear();
        p.session.demarrer(maintenant, rng);
        p.focus_saisie = true;
    }

    /// Valider : le champ n’est vidé que si la réponse a été notée.
    pub fn soumettre(&mut self, mode: Mode, maintenant: f64) -> Soumission {
        let (p, rng) = self.parties(mode);
        let s = p.session.soumettre(&p.saisie, maintenant, rng);
        if matches!(s, Soumission::Notee(_)) {
            p.saisie.clear();
        }
        p.focus_saisie = true;
        s
    }

    pub fn passer(&mut self, mode: Mode, maintenant: f64) {
        let (p, rng) = self.parties(mode);
        if p.session.passer(maintenant, rng) {
            p.saisie.clear();
        }
        p.focus_saisie = true;
    }

    /// ESC : effacer seulement la saisie de l’onglet courant.
    pub fn effacer_saisie(&mut self) {
        let p = self.panneau_mut(self.onglet.mode());
        p.saisie.clear();
        p.focus_saisie = true;
    }

    /// Tic des deux chronos (indépendants).
    pub fn avancer_minuteurs(&mut self, maintenant: f64) {
        self.inverse.session.tic(maintenant);
        self.vitesse.session.tic(maintenant);
    }

    /// Échéance la plus proche parmi les chronos vivants.
    pub fn prochaine_echeance(&self) -> Option<f64> {
        [&self.inverse, &self.vitesse]
            .iter()
            .filter_map(|p| p.session.minuteur().prochaine_echeance())
            .reduce(f64::min)
    }
}

/* ------------------------ Textes de chrono ------------------------ */

/// Compte à rebours "m:ss".
pub fn format_chrono(secondes: u32) -> String {
    format!("{}:{:02}", secondes / 60, secondes % 60)
}

/// Temps mis "Xm Ys".
pub fn format_duree(secondes: u32) -> String {
    format!("{}m {}s", secondes / 60, secondes % 60)
}
