// src/noyau/lecture.rs
//
// Lecture des réponses libres
// ---------------------------
// - parse_pi   : multiples de π (π/2, -π, 2π/3, 3/4π) ou nombres
// - parse_sqrt : décimaux avec √2, sqrt(3), 2√3/3 …
// - ∞ / inf / und / undefined … -> Indefini
//
// Grammaire commune (π seulement pour parse_pi, √ seulement pour parse_sqrt) :
//   valeur  := produit [ '/' produit ]
//   produit := ['+'|'-'] facteur { ['*'] facteur }
//   facteur := nombre | racine | π
// Le dénominateur ne commence jamais par π ("2/π" refusé, "3/4π" accepté).

use std::f64::consts::PI;

use thiserror::Error;
use tracing::trace;

use super::angles::ValeurTrig;
use super::jetons::{format_tokens, tokenize, Tok};
use super::question::Mode;

/// Jetons acceptés comme “infini / indéfini” (après trim + minuscules).
pub const JETONS_INDEFINI: [&str; 7] = [
    "∞",
    "inf",
    "infty",
    "infinity",
    "undefined",
    "und",
    "undef",
];

/// Réponse illisible : classe “pas un nombre”, toujours notée fausse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurLecture {
    #[error("entrée vide")]
    Vide,
    #[error("caractère inattendu: '{0}'")]
    Symbole(char),
    #[error("mot inconnu: {0}")]
    MotInconnu(String),
    #[error("{0} non accepté ici")]
    SymboleInterdit(&'static str),
    #[error("syntaxe: {0}")]
    Syntaxe(String),
    #[error("division par zéro")]
    DivisionParZero,
}

/// Ce que la grammaire autorise comme facteur non numérique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Symboles {
    Pi,
    Racines,
}

/// Lecture selon le mode : angle (π) pour les inverses, valeur (√) pour la vitesse.
pub fn lire_reponse(mode: Mode, texte: &str) -> Result<ValeurTrig, ErreurLecture> {
    match mode {
        Mode::Inverse => parse_pi(texte),
        Mode::Vitesse => parse_sqrt(texte),
    }
}

/// Réponse exprimée en multiple de π (ou nombre nu).
pub fn parse_pi(texte: &str) -> Result<ValeurTrig, ErreurLecture> {
    lire(texte, Symboles::Pi)
}

/// Réponse décimale pouvant contenir √2, √3, sqrt(2) …
pub fn parse_sqrt(texte: &str) -> Result<ValeurTrig, ErreurLecture> {
    lire(texte, Symboles::Racines)
}

/// Vrai si le texte (trim, minuscules) est un jeton infini/indéfini.
pub fn est_jeton_indefini(texte: &str) -> bool {
    let t = texte.trim().to_lowercase();
    JETONS_INDEFINI.contains(&t.as_str())
}

fn lire(texte: &str, permis: Symboles) -> Result<ValeurTrig, ErreurLecture> {
    let t = texte.trim();
    if t.is_empty() {
        return Err(ErreurLecture::Vide);
    }
    if est_jeton_indefini(t) {
        return Ok(ValeurTrig::Indefini);
    }

    let jetons = tokenize(t)?;
    trace!(jetons = %format_tokens(&jetons), "réponse tokenisée");
    let mut a = Analyseur {
        jetons: &jetons,
        pos: 0,
        permis,
        pi_vu: false,
    };

    let v = a.valeur_avec_pi()?;
    if a.pos < jetons.len() {
        return Err(ErreurLecture::Syntaxe(format!(
            "jeton en trop: {:?}",
            jetons[a.pos]
        )));
    }

    if v.is_finite() {
        Ok(ValeurTrig::Fini(v))
    } else {
        Err(ErreurLecture::Syntaxe("valeur non finie".into()))
    }
}

/* ------------------------ Analyseur ------------------------ */

struct Analyseur<'a> {
    jetons: &'a [Tok],
    pos: usize,
    permis: Symboles,
    pi_vu: bool,
}

impl Analyseur<'_> {
    fn courant(&self) -> Option<&Tok> {
        self.jetons.get(self.pos)
    }

    /// Le produit qui commence ici débute-t-il par π (signe éventuel sauté) ?
    fn pi_en_tete(&self) -> bool {
        let mut i = self.pos;
        if matches!(self.jetons.get(i), Some(Tok::Plus | Tok::Minus)) {
            i += 1;
        }
        self.jetons.get(i) == Some(&Tok::Pi)
    }

    fn valeur(&mut self) -> Result<f64, ErreurLecture> {
        let num = self.produit()?;

        if self.courant() != Some(&Tok::Slash) {
            return Ok(num);
        }
        self.pos += 1;

        // "3/4π" = 3π/4 (coefficient puis π), mais "2/π" n’est pas un multiple de π
        if self.pi_en_tete() {
            return Err(ErreurLecture::Syntaxe("π au dénominateur".into()));
        }

        let den = self.produit()?;
        if den == 0.0 {
            return Err(ErreurLecture::DivisionParZero);
        }
        Ok(num / den)
    }

    /// Valeur complète : π (s’il apparaît) multiplie toute la fraction.
    fn valeur_avec_pi(&mut self) -> Result<f64, ErreurLecture> {
        let v = self.valeur()?;
        Ok(if self.pi_vu { v * PI } else { v })
    }

    /// Produit signé. π compte pour 1 ici (voir valeur_avec_pi) :
    /// "3/4π" se lit (3/4)·π, comme "3π/4".
    fn produit(&mut self) -> Result<f64, ErreurLecture> {
        let mut signe = 1.0;
        match self.courant() {
            Some(Tok::Minus) => {
                signe = -1.0;
                self.pos += 1;
            }
            Some(Tok::Plus) => self.pos += 1,
            _ => {}
        }

        let mut acc = self.facteur(true)?;
        loop {
            match self.courant() {
                Some(Tok::Star) => {
                    self.pos += 1;
                    acc *= self.facteur(true)?;
                }
                Some(Tok::Pi | Tok::Racine(_)) => acc *= self.facteur(false)?,
                Some(Tok::Num(_)) => {
                    return Err(ErreurLecture::Syntaxe(
                        "nombre collé à un autre facteur (utiliser *)".into(),
                    ))
                }
                _ => break,
            }
        }

        Ok(signe * acc)
    }

    fn facteur(&mut self, nombre_permis: bool) -> Result<f64, ErreurLecture> {
        let tok = self
            .courant()
            .cloned()
            .ok_or_else(|| ErreurLecture::Syntaxe("facteur attendu".into()))?;

        let v = match tok {
            Tok::Num(x) if nombre_permis => x,
            Tok::Pi => {
                if self.permis != Symboles::Pi {
                    return Err(ErreurLecture::SymboleInterdit("π"));
                }
                if self.pi_vu {
                    return Err(ErreurLecture::Syntaxe("π répété".into()));
                }
                self.pi_vu = true;
                1.0
            }
            Tok::Racine(r) => {
                if self.permis != Symboles::Racines {
                    return Err(ErreurLecture::SymboleInterdit("√"));
                }
                r.sqrt()
            }
            autre => {
                return Err(ErreurLecture::Syntaxe(format!(
                    "facteur attendu, trouvé {autre:?}"
                )))
            }
        };

        self.pos += 1;
        Ok(v)
    }
}
