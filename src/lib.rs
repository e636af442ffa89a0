//! Calculatrice RPN
//!
//! - `noyau`   : évaluateur à pile (aucune entrée/sortie)
//! - `app`     : colle REPL, boucle terminal, fenêtre eframe
//! - `options` : ligne de commande

pub mod app;
pub mod noyau;
pub mod options;
