// src/app/texte.rs
//
// Adaptateur texte (natif seulement)
// ----------------------------------
// Même SessionQuiz que l’interface egui, pilotée par des lignes :
// - une question par invite "[n/12] m:ss énoncé = "
// - ligne vide : redemande (rien n’est compté)
// - "?"        : passer la question
// - fin de l’entrée : fin de partie
//
// Le chrono est interrogé avant chaque note : une réponse tapée après
// l’échéance n’est pas comptée.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::etat::{format_chrono, format_duree};
use crate::noyau::{Mode, Phase, Reglages, SessionQuiz, Soumission, Verdict};

/// Saisie réservée pour passer la question.
pub const PASSER: &str = "?";

/// Joue une partie complète sur des flux quelconques.
///
/// `horloge` renvoie le temps courant en secondes (origine libre).
pub fn jouer<E, S, G, H>(
    entree: E,
    sortie: &mut S,
    session: &mut SessionQuiz,
    rng: &mut G,
    mut horloge: H,
) -> io::Result<()>
where
    E: BufRead,
    S: Write,
    G: Rng + ?Sized,
    H: FnMut() -> f64,
{
    let r = *session.reglages();
    writeln!(
        sortie,
        "{} : {} questions en {}. \"{PASSER}\" pour passer.",
        session.mode().titre(),
        r.total_questions,
        format_chrono(r.duree_secondes)
    )?;

    session.demarrer(horloge(), rng);
    let mut lignes = entree.lines();

    while session.phase() == Phase::EnCours {
        let Some(enonce) = session.question_courante().map(|q| q.enonce.clone()) else {
            break;
        };
        write!(
            sortie,
            "[{}/{}] {} {} = ",
            session.questions_repondues() + 1,
            session.total_questions(),
            format_chrono(session.temps_restant()),
            enonce
        )?;
        sortie.flush()?;

        let Some(ligne) = lignes.next().transpose()? else {
            writeln!(sortie)?;
            session.terminer(horloge());
            break;
        };

        let maintenant = horloge();
        if session.tic(maintenant) {
            writeln!(sortie, "Temps écoulé !")?;
            break;
        }

        if ligne.trim() == PASSER {
            session.passer(maintenant, rng);
        } else if session.soumettre(&ligne, maintenant, rng) == Soumission::Ignoree {
            continue;
        }

        if let Some(e) = session.historique().last() {
            match e.verdict {
                Verdict::Juste => writeln!(sortie, "  juste")?,
                Verdict::Faux => writeln!(sortie, "  faux, réponse : {}", e.reponse_attendue())?,
                Verdict::Passee => writeln!(sortie, "  passée, réponse : {}", e.reponse_attendue())?,
            }
        }
    }

    writeln!(
        sortie,
        "Score final : {}/{}",
        session.score(),
        session.total_questions()
    )?;
    if let Some(d) = session.duree_secondes() {
        writeln!(sortie, "Temps : {}", format_duree(d))?;
    }
    Ok(())
}

/// Partie sur stdin/stdout avec l’horloge murale.
pub fn lancer_console(mode: Mode, reglages: Reglages) -> io::Result<()> {
    let mut session = SessionQuiz::nouvelle(mode, reglages);
    let mut rng = StdRng::from_os_rng();
    let origine = Instant::now();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    jouer(
        stdin.lock(),
        &mut stdout,
        &mut session,
        &mut rng,
        || origine.elapsed().as_secs_f64(),
    )
}
