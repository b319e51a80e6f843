//! Scénarios de partie : compteur, fin unique, minuteur, entrée vide.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::lecture::lire_reponse;
use super::notation::noter;
use super::question::Mode;
use super::reglages::Reglages;
use super::session::{Phase, SessionQuiz, Soumission, Verdict};

fn partie(mode: Mode) -> (SessionQuiz, StdRng) {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut s = SessionQuiz::nouvelle(mode, Reglages::default());
    s.demarrer(0.0, &mut rng);
    (s, rng)
}

/// Réponse exacte affichée de la question courante.
fn bonne_reponse(s: &SessionQuiz) -> String {
    s.question_courante()
        .map(|q| q.reponse_affichee.clone())
        .unwrap_or_default()
}

#[test]
fn session_entree_vide_sans_effet() {
    let (mut s, mut rng) = partie(Mode::Inverse);
    let avant = s.question_courante().cloned();

    assert_eq!(s.soumettre("", 1.0, &mut rng), Soumission::Ignoree);
    assert_eq!(s.soumettre("   \t", 1.0, &mut rng), Soumission::Ignoree);

    assert_eq!(s.questions_repondues(), 0);
    assert!(s.historique().is_empty());
    assert_eq!(s.question_courante().cloned(), avant);
}

#[test]
fn session_douze_reponses_justes() {
    for mode in [Mode::Inverse, Mode::Vitesse] {
        let (mut s, mut rng) = partie(mode);
        for i in 0..12 {
            let r = bonne_reponse(&s);
            assert_eq!(
                s.soumettre(&r, f64::from(i), &mut rng),
                Soumission::Notee(Verdict::Juste),
                "mode={mode:?} r={r:?}"
            );
        }

        assert_eq!(s.phase(), Phase::Terminee);
        assert_eq!(s.score(), 12);
        assert_eq!(s.questions_repondues(), 12);
        assert!(s.question_courante().is_none());
        assert!(!s.minuteur().est_actif());
        assert_eq!(s.duree_secondes(), Some(11));

        // plus rien n’est accepté après la fin
        assert_eq!(s.soumettre("1", 20.0, &mut rng), Soumission::Ignoree);
        assert!(!s.passer(20.0, &mut rng));
        assert_eq!(s.questions_repondues(), 12);
    }
}

#[test]
fn session_historique_garde_la_saisie() {
    let (mut s, mut rng) = partie(Mode::Vitesse);
    let q = s.question_courante().cloned();

    assert_eq!(
        s.soumettre("  n’importe quoi ", 1.0, &mut rng),
        Soumission::Notee(Verdict::Faux)
    );

    let e = &s.historique()[0];
    assert_eq!(e.saisie, "n’importe quoi");
    assert_eq!(e.verdict, Verdict::Faux);
    assert_eq!(Some(&e.question), q.as_ref());
    assert_eq!(e.enonce(), q.as_ref().map_or("", |q| q.enonce.as_str()));
    assert_eq!(e.reponse_attendue(), e.question.reponse_affichee);
    assert_eq!(s.score(), 0);
    assert_eq!(s.questions_repondues(), 1);
}

#[test]
fn session_passer_compte_la_question() {
    let (mut s, mut rng) = partie(Mode::Inverse);
    for _ in 0..12 {
        assert!(s.passer(3.0, &mut rng));
    }
    assert_eq!(s.phase(), Phase::Terminee);
    assert_eq!(s.score(), 0);
    assert!(s.historique().iter().all(|e| e.verdict == Verdict::Passee));
    assert!(s.historique().iter().all(|e| e.saisie.is_empty()));
}

#[test]
fn session_temps_ecoule() {
    let (mut s, mut rng) = partie(Mode::Vitesse);

    assert!(!s.tic(0.5));
    assert_eq!(s.temps_restant(), 120);

    assert!(!s.tic(10.2));
    assert_eq!(s.temps_restant(), 110);

    // une réponse au passage ne touche pas au chrono
    let r = bonne_reponse(&s);
    s.soumettre(&r, 10.5, &mut rng);
    assert_eq!(s.temps_restant(), 110);

    assert!(s.tic(120.0));
    assert_eq!(s.temps_restant(), 0);
    assert_eq!(s.phase(), Phase::Terminee);
    assert_eq!(s.duree_secondes(), Some(120));

    // fin une seule fois
    assert!(!s.tic(121.0));
    assert!(!s.terminer(122.0));
    assert_eq!(s.duree_secondes(), Some(120));
}

#[test]
fn session_redemarrage_un_seul_minuteur() {
    let (mut s, mut rng) = partie(Mode::Inverse);
    let premier = s.minuteur().jeton_actif();
    s.passer(1.0, &mut rng);

    s.demarrer(5.0, &mut rng);
    let second = s.minuteur().jeton_actif();

    assert!(premier.is_some() && second.is_some());
    assert_ne!(premier, second);
    assert_eq!(s.questions_repondues(), 0);
    assert!(s.historique().is_empty());
    assert_eq!(s.temps_restant(), 120);

    // l’ancien départ (t=0) ne compte plus : seul le nouveau cadence
    assert!(!s.tic(5.5));
    assert_eq!(s.temps_restant(), 120);
    assert!(!s.tic(6.0));
    assert_eq!(s.temps_restant(), 119);
}

#[test]
fn session_modes_independants() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut inverse = SessionQuiz::nouvelle(Mode::Inverse, Reglages::default());
    let mut vitesse = SessionQuiz::nouvelle(Mode::Vitesse, Reglages::default());

    inverse.demarrer(0.0, &mut rng);
    vitesse.demarrer(30.0, &mut rng);
    inverse.passer(31.0, &mut rng);

    inverse.tic(40.0);
    vitesse.tic(40.0);

    assert_eq!(inverse.temps_restant(), 80);
    assert_eq!(vitesse.temps_restant(), 110);
    assert_eq!(inverse.questions_repondues(), 1);
    assert_eq!(vitesse.questions_repondues(), 0);
    assert_eq!(vitesse.phase(), Phase::EnCours);
}

#[test]
fn session_question_courante_notee_comme_le_noyau() {
    let (mut s, mut rng) = partie(Mode::Inverse);
    let q = s.question_courante().cloned();
    let attendu = q
        .as_ref()
        .map(|q| noter(Mode::Inverse, &lire_reponse(Mode::Inverse, "π/4"), q));

    let verdict = s.soumettre("π/4", 1.0, &mut rng);
    let juste = matches!(verdict, Soumission::Notee(Verdict::Juste));
    assert_eq!(Some(juste), attendu);
}

/* ------------------------ Minuteur seul ------------------------ */

#[test]
fn minuteur_un_seul_vivant() {
    use super::minuteur::Minuteur;

    let mut m = Minuteur::default();
    assert!(!m.annuler());
    assert_eq!(m.tics_ecoules(10.0), 0);

    let a = m.demarrer(0.0);
    let b = m.demarrer(0.0);
    assert_ne!(a, b);
    assert_eq!(m.jeton_actif(), Some(b));
    assert_eq!(m.prochaine_echeance(), Some(1.0));

    assert_eq!(m.tics_ecoules(0.99), 0);
    assert_eq!(m.tics_ecoules(1.0), 1);
    assert_eq!(m.tics_ecoules(1.5), 0);
    // saut d’horloge : tous les tics d’un coup
    assert_eq!(m.tics_ecoules(10.0), 9);
    assert_eq!(m.prochaine_echeance(), Some(11.0));

    assert!(m.annuler());
    assert!(!m.est_actif());
    assert_eq!(m.tics_ecoules(50.0), 0);
}

#[test]
fn minuteur_periode_invalide() {
    use super::minuteur::Minuteur;

    let mut m = Minuteur::new(0.0);
    m.demarrer(0.0);
    assert_eq!(m.tics_ecoules(3.0), 3);
}
