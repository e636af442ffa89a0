// src/main.rs
//
// Calculatrice RPN — point d’entrée
// ---------------------------------
// - Par défaut       : boucle terminal (rustyline)
// - LIGNES...        : évaluation sans interaction, puis sortie
// - --gui            : fenêtre eframe (même colle de commandes)
//
// Journaux sur stderr (env_logger), niveau via -v ou RUST_LOG.

use anyhow::anyhow;
use eframe::egui;
use structopt::StructOpt;

use calculatrice_rpn::app::{self, AppCalc};
use calculatrice_rpn::noyau::{Calculatrice, Grammaire};
use calculatrice_rpn::options::Options;

/// Titre unique de la fenêtre.
const TITRE_APP: &str = "Calculatrice RPN";

fn init_journaux(options: &Options) {
    let env = env_logger::Env::default().default_filter_or(options.niveau_log());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn lancer_fenetre(grammaire: Grammaire) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 740.0])
            .with_min_inner_size([420.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(grammaire)))),
    )
    .map_err(|e| anyhow!("fenêtre graphique : {e}"))
}

fn main() -> anyhow::Result<()> {
    let options = Options::from_args();
    init_journaux(&options);

    let grammaire = options.grammaire();
    log::info!("grammaire des littéraux : {grammaire:?}");

    if options.gui {
        return lancer_fenetre(grammaire);
    }

    let mut calc = Calculatrice::avec_grammaire(grammaire);
    if !options.lignes.is_empty() {
        let stdout = std::io::stdout();
        return app::terminal::evaluer_lignes(&mut calc, &options.lignes, &mut stdout.lock());
    }

    app::terminal::lancer(calc, &options.invite)
}
