//! Partie de quiz (un objet par mode, aucun état global).
//!
//! Rôle : enchaîner les questions, tenir score / compteur / temps, archiver
//! l’historique. Tout passe par les services purs du noyau.
//!
//! Contrats :
//! - `0 ≤ questions_repondues ≤ total`.
//! - Passage à `Terminee` une seule fois (total atteint OU temps écoulé).
//! - Entrée vide : aucun effet (pas notée, pas comptée, pas d’avance).
//! - Au plus un minuteur vivant : `demarrer` annule le précédent.

use rand::Rng;
use tracing::info;

use super::lecture::lire_reponse;
use super::minuteur::Minuteur;
use super::notation::noter;
use super::question::{generer_question, Mode, Question};
use super::reglages::Reglages;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Accueil,
    EnCours,
    Terminee,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Juste,
    Faux,
    Passee,
}

/// Une ligne d’historique (lecture seule une fois archivée).
#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub question: Question,
    /// Texte tapé tel quel (vide si passée).
    pub saisie: String,
    pub verdict: Verdict,
}

impl EntreeHistorique {
    pub fn enonce(&self) -> &str {
        &self.question.enonce
    }

    /// Réponse exacte révélée.
    pub fn reponse_attendue(&self) -> &str {
        &self.question.reponse_affichee
    }
}

/// Résultat d’une soumission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Soumission {
    /// Entrée vide ou partie inactive : rien n’a changé.
    Ignoree,
    Notee(Verdict),
}

#[derive(Clone, Debug)]
pub struct SessionQuiz {
    mode: Mode,
    reglages: Reglages,

    score: u32,
    questions_repondues: u32,
    question_courante: Option<Question>,

    debut: Option<f64>,
    fin: Option<f64>,
    temps_restant: u32,

    historique: Vec<EntreeHistorique>,
    phase: Phase,
    minuteur: Minuteur,
}

impl SessionQuiz {
    pub fn nouvelle(mode: Mode, reglages: Reglages) -> Self {
        Self {
            mode,
            reglages,
            score: 0,
            questions_repondues: 0,
            question_courante: None,
            debut: None,
            fin: None,
            temps_restant: reglages.duree_secondes,
            historique: Vec::new(),
            phase: Phase::Accueil,
            minuteur: Minuteur::default(),
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions_repondues(&self) -> u32 {
        self.questions_repondues
    }

    pub fn total_questions(&self) -> u32 {
        self.reglages.total_questions
    }

    pub fn temps_restant(&self) -> u32 {
        self.temps_restant
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn question_courante(&self) -> Option<&Question> {
        self.question_courante.as_ref()
    }

    /// Historique dans l’ordre des réponses (la vue affiche le plus récent d’abord).
    pub fn historique(&self) -> &[EntreeHistorique] {
        &self.historique
    }

    pub fn minuteur(&self) -> &Minuteur {
        &self.minuteur
    }

    /// Durée de la partie en secondes (arrondie), une fois terminée.
    pub fn duree_secondes(&self) -> Option<u32> {
        let (debut, fin) = (self.debut?, self.fin?);
        Some((fin - debut).max(0.0).round() as u32)
    }

    /* ------------------------ Actions ------------------------ */

    /// Démarre (ou redémarre) une partie.
    pub fn demarrer<R: Rng + ?Sized>(&mut self, maintenant: f64, rng: &mut R) {
        self.score = 0;
        self.questions_repondues = 0;
        self.temps_restant = self.reglages.duree_secondes;
        self.historique.clear();
        self.fin = None;
        self.debut = Some(maintenant);
        self.phase = Phase::EnCours;

        let jeton = self.minuteur.demarrer(maintenant);
        info!(mode = ?self.mode, ?jeton, "partie démarrée");

        self.question_courante = Some(generer_question(self.mode, &self.reglages, rng));
    }

    /// Soumet une réponse tapée.
    pub fn soumettre<R: Rng + ?Sized>(
        &mut self,
        texte: &str,
        maintenant: f64,
        rng: &mut R,
    ) -> Soumission {
        if self.phase != Phase::EnCours {
            return Soumission::Ignoree;
        }
        let saisie = texte.trim();
        if saisie.is_empty() {
            return Soumission::Ignoree;
        }
        let Some(question) = self.question_courante.take() else {
            return Soumission::Ignoree;
        };

        let lu = lire_reponse(self.mode, saisie);
        let verdict = if noter(self.mode, &lu, &question) {
            self.score += 1;
            Verdict::Juste
        } else {
            Verdict::Faux
        };

        self.archiver(question, saisie.to_string(), verdict);
        self.avancer(maintenant, rng);
        Soumission::Notee(verdict)
    }

    /// Passe la question (réponse révélée, comptée comme répondue).
    pub fn passer<R: Rng + ?Sized>(&mut self, maintenant: f64, rng: &mut R) -> bool {
        if self.phase != Phase::EnCours {
            return false;
        }
        let Some(question) = self.question_courante.take() else {
            return false;
        };

        self.archiver(question, String::new(), Verdict::Passee);
        self.avancer(maintenant, rng);
        true
    }

    /// Consomme les secondes écoulées. true si la partie vient de se terminer.
    pub fn tic(&mut self, maintenant: f64) -> bool {
        if self.phase != Phase::EnCours {
            return false;
        }

        let tics = self.minuteur.tics_ecoules(maintenant);
        self.temps_restant = self.temps_restant.saturating_sub(tics);

        if self.temps_restant == 0 {
            return self.terminer(maintenant);
        }
        false
    }

    /// Fin de partie. true seulement lors de la transition (une seule fois).
    pub fn terminer(&mut self, maintenant: f64) -> bool {
        if self.phase != Phase::EnCours {
            return false;
        }

        self.minuteur.annuler();
        self.phase = Phase::Terminee;
        self.fin = Some(maintenant);
        self.question_courante = None;

        info!(
            mode = ?self.mode,
            score = self.score,
            repondues = self.questions_repondues,
            duree = ?self.duree_secondes(),
            "partie terminée"
        );
        true
    }

    fn archiver(&mut self, question: Question, saisie: String, verdict: Verdict) {
        self.historique.push(EntreeHistorique {
            question,
            saisie,
            verdict,
        });
        self.questions_repondues += 1;
    }

    fn avancer<R: Rng + ?Sized>(&mut self, maintenant: f64, rng: &mut R) {
        if self.questions_repondues >= self.reglages.total_questions {
            self.terminer(maintenant);
            return;
        }
        self.question_courante = Some(generer_question(self.mode, &self.reglages, rng));
    }
}
