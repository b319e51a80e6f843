// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppQuiz (etat.rs) pour natif + wasm
// - Deux onglets indépendants : Trig inverse / Trig vitesse
// - Trois écrans par onglet : accueil, partie, résultat
// - Clavier : Enter valide (quand le champ a le focus)
//
// Note :
// - Les clics produisent une Action, appliquée après le rendu
//   (pas d’emprunt croisé vue / état pendant l’affichage).

use eframe::egui;

use super::etat::{format_chrono, format_duree, AppQuiz, Onglet, PanneauQuiz};
use crate::noyau::{Mode, Phase, Verdict};

const VERT: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const JAUNE: egui::Color32 = egui::Color32::from_rgb(202, 138, 4);

impl AppQuiz {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.onglet, Onglet::Inverse, Mode::Inverse.titre());
            ui.selectable_value(&mut self.onglet, Onglet::Vitesse, Mode::Vitesse.titre());
        });
        ui.separator();

        let mode = self.onglet.mode();
        let action = ui_panneau(ui, mode, self.panneau_mut(mode));

        match action {
            Some(Action::Demarrer) => self.demarrer(mode, maintenant),
            Some(Action::Soumettre) => {
                self.soumettre(mode, maintenant);
            }
            Some(Action::Passer) => self.passer(mode, maintenant),
            None => {}
        }
    }
}

fn ui_panneau(ui: &mut egui::Ui, mode: Mode, p: &mut PanneauQuiz) -> Option<Action> {
    match p.session.phase() {
        Phase::Accueil => ui_accueil(ui, mode, p),
        Phase::EnCours => ui_partie(ui, mode, p),
        Phase::Terminee => ui_resultat(ui, p),
    }
}

fn ui_accueil(ui: &mut egui::Ui, mode: Mode, p: &PanneauQuiz) -> Option<Action> {
    let r = p.session.reglages();

    ui.heading(mode.titre());
    ui.add_space(6.0);
    ui.label(format!(
        "{} questions, {} pour répondre.",
        r.total_questions,
        format_chrono(r.duree_secondes)
    ));
    ui.label(match mode {
        Mode::Inverse => "Répondre par un angle en radians : π/6, 3π/4, 2pi/3, 0…",
        Mode::Vitesse => "Répondre par une valeur exacte : √3/2, sqrt(2)/2, 2√3/3, -1, und…",
    });
    ui.add_space(8.0);

    ui.add_sized([140.0, 32.0], egui::Button::new("Commencer"))
        .clicked()
        .then_some(Action::Demarrer)
}

fn ui_partie(ui: &mut egui::Ui, mode: Mode, p: &mut PanneauQuiz) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(format!(
            "Score : {}/{}",
            p.session.score(),
            p.session.total_questions()
        ));
        ui.separator();
        ui.label(format!("Temps : {}", format_chrono(p.session.temps_restant())));
        ui.separator();
        ui.label(format!(
            "Question {}/{}",
            p.session.questions_repondues() + 1,
            p.session.total_questions()
        ));
    });

    ui.add_space(8.0);
    if let Some(q) = p.session.question_courante() {
        ui.heading(format!("{} = ?", q.enonce));
    }
    ui.add_space(6.0);

    let indice = match mode {
        Mode::Inverse => "Ex: π/3, 5pi/6, 0",
        Mode::Vitesse => "Ex: √3/2, sqrt(2), -1/2, und",
    };
    let resp = ui.add(
        egui::TextEdit::singleline(&mut p.saisie)
            .desired_width(ui.available_width())
            .hint_text(indice)
            .id_salt(("saisie", mode))
            .code_editor(),
    );

    if p.focus_saisie {
        resp.request_focus();
        p.focus_saisie = false;
    }

    // Enter : le champ perd le focus au moment de la touche
    if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        action = Some(Action::Soumettre);
    }

    ui.horizontal(|ui| {
        if ui.add_sized([90.0, 30.0], egui::Button::new("Valider")).clicked() {
            action = Some(Action::Soumettre);
        }
        if ui.add_sized([90.0, 30.0], egui::Button::new("Passer")).clicked() {
            action = Some(Action::Passer);
        }
    });

    ui.add_space(8.0);
    ui.separator();
    ui_historique(ui, p);

    action
}

fn ui_resultat(ui: &mut egui::Ui, p: &PanneauQuiz) -> Option<Action> {
    ui.heading("Partie terminée");
    ui.add_space(6.0);
    ui.label(format!(
        "Score final : {}/{}",
        p.session.score(),
        p.session.total_questions()
    ));
    if let Some(d) = p.session.duree_secondes() {
        ui.label(format!("Temps : {}", format_duree(d)));
    }
    ui.add_space(8.0);

    let action = ui
        .add_sized([140.0, 32.0], egui::Button::new("Recommencer"))
        .clicked()
        .then_some(Action::Demarrer);

    ui.add_space(8.0);
    ui.separator();
    ui_historique(ui, p);

    action
}

/// Historique : le plus récent en haut.
fn ui_historique(ui: &mut egui::Ui, p: &PanneauQuiz) {
    let rouge = ui.visuals().error_fg_color;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for e in p.session.historique().iter().rev() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.monospace(format!("{} =", e.enonce()));
                        match e.verdict {
                            Verdict::Juste => ui.colored_label(VERT, &e.saisie),
                            Verdict::Faux => ui.colored_label(rouge, &e.saisie),
                            Verdict::Passee => ui.colored_label(JAUNE, "Passée"),
                        };
                    });
                    if e.verdict != Verdict::Juste {
                        ui.small(format!("Réponse : {}", e.reponse_attendue()));
                    }
                });
            }
        });
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Demarrer,
    Soumettre,
    Passer,
}
