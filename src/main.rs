// src/main.rs
//
// Quiz Trig — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 ou partie en mode texte (--texte)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// Drapeaux (natif) :
//   --texte          partie dans le terminal (Trig inverse)
//   --vitesse        avec --texte : Trig vitesse
//   --base           inverses arcsin/arccos/arctan seulement
//   --sans-retirage  garder le premier tirage (réponses ∞ possibles)
//
// Journal : RUST_LOG (ex: RUST_LOG=quiz_trig=debug), "info" par défaut.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppQuiz;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Quiz Trig";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, thiserror::Error)]
enum ErreurLancement {
    #[error("entrée/sortie: {0}")]
    Io(#[from] std::io::Error),
    #[error("interface: {0}")]
    Interface(#[from] eframe::Error),
}

#[cfg(not(target_arch = "wasm32"))]
fn initialiser_journal() {
    use tracing_subscriber::EnvFilter;

    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stderr : stdout reste propre pour le mode texte
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), ErreurLancement> {
    use clap::Parser;

    use app::ligne_commande::Args;
    use noyau::Reglages;

    initialiser_journal();

    let args = Args::parse();
    let reglages = Reglages::from(&args);

    if let Some(mode) = args.mode_texte() {
        tracing::info!(?mode, ?reglages, "mode texte");
        app::texte::lancer_console(mode, reglages)?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 740.0])
            .with_min_inner_size([420.0, 620.0]),
        ..Default::default()
    };

    tracing::info!(?reglages, "interface graphique");
    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppQuiz::new(reglages)))),
    )?;
    Ok(())
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppQuiz, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let canvas: HtmlCanvasElement = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppQuiz>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
