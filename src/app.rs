// src/app.rs
//
// Quiz Trig — module App (racine)
// -------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs ; ligne_commande.rs + texte.rs en natif)
// - Ré-exporter AppQuiz (pour main.rs: use crate::app::AppQuiz;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Enter est géré dans vue.rs (quand le champ a le focus).
// - Les chronos avancent ici, une fois par frame, avec l’horloge egui.

pub mod etat;
pub mod vue;

#[cfg(not(target_arch = "wasm32"))]
pub mod ligne_commande;

#[cfg(not(target_arch = "wasm32"))]
pub mod texte;

pub use etat::AppQuiz;

use std::time::Duration;

use eframe::egui;

impl eframe::App for AppQuiz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        // ESC = effacer seulement la saisie de l’onglet courant.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.effacer_saisie();
        }

        self.avancer_minuteurs(maintenant);

        // Pas d’événement clavier pendant une partie : on se réveille au tic.
        if let Some(echeance) = self.prochaine_echeance() {
            let attente = (echeance - maintenant).max(0.0);
            ctx.request_repaint_after(Duration::from_secs_f64(attente));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant);
        });
    }
}
