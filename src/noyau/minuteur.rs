// src/noyau/minuteur.rs
//
// Minuteur annulable (tic périodique)
// -----------------------------------
// - Horloge externe en secondes (egui: input.time ; texte: Instant)
// - Au plus UNE tâche vivante : demarrer() annule la précédente
// - Aucun thread : l’appelant interroge tics_ecoules(maintenant)

/// Identifiant de la tâche en cours (change à chaque démarrage).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JetonMinuteur(u64);

#[derive(Clone, Debug)]
struct Tache {
    jeton: JetonMinuteur,
    prochain_tic: f64,
}

#[derive(Clone, Debug)]
pub struct Minuteur {
    periode: f64,
    tache: Option<Tache>,
    compteur: u64,
}

impl Default for Minuteur {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Minuteur {
    /// Période en secondes (non positive : 1 s).
    pub fn new(periode: f64) -> Self {
        Self {
            periode: if periode > 0.0 { periode } else { 1.0 },
            tache: None,
            compteur: 0,
        }
    }

    /// Démarre une nouvelle tâche (l’ancienne est annulée d’abord).
    pub fn demarrer(&mut self, maintenant: f64) -> JetonMinuteur {
        self.annuler();

        self.compteur += 1;
        let jeton = JetonMinuteur(self.compteur);
        self.tache = Some(Tache {
            jeton,
            prochain_tic: maintenant + self.periode,
        });
        jeton
    }

    /// Annule la tâche courante. true si une tâche était vivante.
    pub fn annuler(&mut self) -> bool {
        self.tache.take().is_some()
    }

    pub fn est_actif(&self) -> bool {
        self.tache.is_some()
    }

    pub fn jeton_actif(&self) -> Option<JetonMinuteur> {
        self.tache.as_ref().map(|t| t.jeton)
    }

    /// Prochaine échéance (pour programmer un rafraîchissement).
    pub fn prochaine_echeance(&self) -> Option<f64> {
        self.tache.as_ref().map(|t| t.prochain_tic)
    }

    /// Nombre de périodes entières écoulées depuis le dernier appel.
    pub fn tics_ecoules(&mut self, maintenant: f64) -> u32 {
        let periode = self.periode;
        let Some(t) = self.tache.as_mut() else {
            return 0;
        };

        if maintenant < t.prochain_tic {
            return 0;
        }

        // saut d’horloge (onglet en veille…) : pas de boucle tic par tic
        let n = (((maintenant - t.prochain_tic) / periode).floor() as u32).saturating_add(1);
        t.prochain_tic += f64::from(n) * periode;
        n
    }
}
