// src/app/terminal.rs
//
// Boucle terminal (rustyline) + mode “lot” (lignes passées en arguments).
// Rendu identique : réponse, puis une ligne vide (sauf à la sortie).

use std::io::Write;

use anyhow::Context;
use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::commandes::{executer, AU_REVOIR};
use crate::noyau::Calculatrice;

pub fn lancer(mut calc: Calculatrice, invite: &str) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new().context("initialisation du terminal")?;
    info!("boucle terminal ({:?})", calc.grammaire());

    loop {
        match rl.readline(invite) {
            Ok(ligne) => {
                if !ligne.trim().is_empty() {
                    // historique en mémoire seulement
                    if let Err(e) = rl.add_history_entry(ligne.as_str()) {
                        debug!("historique : {e}");
                    }
                }

                let rep = executer(&mut calc, &ligne);
                for l in &rep.lignes {
                    println!("{l}");
                }
                if rep.quitter {
                    break;
                }
                if !rep.lignes.is_empty() {
                    println!();
                }
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => {
                println!();
                println!("{AU_REVOIR}");
                break;
            }
            Err(e) => return Err(e).context("lecture de l’entrée"),
        }
    }

    Ok(())
}

/// Évalue une suite de lignes sans interaction ; s’arrête sur une commande de sortie.
pub fn evaluer_lignes<I, S, W>(calc: &mut Calculatrice, lignes: I, sortie: &mut W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    for ligne in lignes {
        let rep = executer(calc, ligne.as_ref());
        for l in &rep.lignes {
            writeln!(sortie, "{l}")?;
        }
        if rep.quitter {
            break;
        }
        if !rep.lignes.is_empty() {
            writeln!(sortie)?;
        }
    }
    sortie.flush()?;
    Ok(())
}
