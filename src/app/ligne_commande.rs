// src/app/ligne_commande.rs
//
// Drapeaux de ligne de commande (natif seulement)
// -----------------------------------------------
// - Args (clap derive) -> Reglages + choix de l’interface
// - Drapeau inconnu ou mal écrit : erreur clap (pas ignoré)

use clap::Parser;

use crate::noyau::reglages::{JeuInverses, Retirage};
use crate::noyau::{Mode, Reglages};

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(author, version, about = "Quiz de trigonométrie (angles usuels)")]
pub struct Args {
    /// Partie dans le terminal au lieu de la fenêtre
    #[arg(long)]
    pub texte: bool,
    /// Trig vitesse (valeurs) au lieu de Trig inverse, en mode texte
    #[arg(long, requires = "texte")]
    pub vitesse: bool,
    /// Inverses arcsin/arccos/arctan seulement
    #[arg(long)]
    pub base: bool,
    /// Garder le premier tirage (réponses ∞ possibles)
    #[arg(long)]
    pub sans_retirage: bool,
}

impl Args {
    /// Mode de la partie texte, None pour l’interface graphique.
    pub fn mode_texte(&self) -> Option<Mode> {
        match (self.texte, self.vitesse) {
            (false, _) => None,
            (true, false) => Some(Mode::Inverse),
            (true, true) => Some(Mode::Vitesse),
        }
    }
}

impl From<&Args> for Reglages {
    fn from(args: &Args) -> Self {
        let mut r = Reglages::default();
        if args.base {
            r.inverses = JeuInverses::Base;
        }
        if args.sans_retirage {
            r.retirage_inverse = Retirage::Aucun;
            r.retirage_vitesse = Retirage::Aucun;
        }
        r
    }
}
