//! Réglages d’une partie (constantes + politique de tirage).
//!
//! Valeurs par défaut fixes : 12 questions, 120 s, inverses étendues,
//! retirage jusqu’à valeur finie dans les deux modes.

/// Nombre de questions par partie.
pub const TOTAL_QUESTIONS: u32 = 12;

/// Budget temps d’une partie (secondes).
pub const DUREE_SECONDES: u32 = 120;

/// Nombre maximal de tirages pour obtenir une valeur finie.
pub const ESSAIS_MAX: u32 = 50;

/// Ensemble de fonctions inverses proposées.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JeuInverses {
    /// arcsin, arccos, arctan
    Base,
    /// + arcsec, arccsc, arccot
    Etendu,
}

/// Politique de retirage quand la valeur tirée est infinie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Retirage {
    /// Retire (fonction, angle) jusqu’à une valeur finie, puis repli déterministe.
    JusquaFini { essais_max: u32 },
    /// Premier tirage conservé : la réponse peut être ∞.
    Aucun,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub total_questions: u32,
    pub duree_secondes: u32,
    pub inverses: JeuInverses,
    pub retirage_inverse: Retirage,
    pub retirage_vitesse: Retirage,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            total_questions: TOTAL_QUESTIONS,
            duree_secondes: DUREE_SECONDES,
            inverses: JeuInverses::Etendu,
            retirage_inverse: Retirage::JusquaFini {
                essais_max: ESSAIS_MAX,
            },
            retirage_vitesse: Retirage::JusquaFini {
                essais_max: ESSAIS_MAX,
            },
        }
    }
}
