use structopt::StructOpt;

use crate::noyau::Grammaire;

/// Calculatrice en notation polonaise inverse (RPN).
#[derive(StructOpt, Debug)]
#[structopt(
    name = "calculatrice_rpn",
    setting = structopt::clap::AppSettings::AllowLeadingHyphen
)]
pub struct Options {
    /// Ouvre la fenêtre graphique au lieu de la boucle terminal.
    #[structopt(long)]
    pub gui: bool,

    /// Littéraux en notation scientifique usuelle (`1.5e-10`) au lieu de la grammaire
    /// historique (`1.5-e10`).
    #[structopt(long = "exposant-conventionnel")]
    pub exposant_conventionnel: bool,

    /// Invite du mode terminal.
    #[structopt(long, default_value = "> ")]
    pub invite: String,

    /// Verbosité des journaux (-v info, -vv debug, -vvv trace). `RUST_LOG` reste prioritaire.
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,

    /// Lignes à évaluer sans interaction (ex: "3 4 +" L). Une ligne peut commencer
    /// par un littéral négatif ("-3 abs").
    #[structopt(allow_hyphen_values = true)]
    pub lignes: Vec<String>,
}

impl Options {
    pub fn grammaire(&self) -> Grammaire {
        if self.exposant_conventionnel {
            Grammaire::Conventionnelle
        } else {
            Grammaire::Historique
        }
    }

    pub fn niveau_log(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
