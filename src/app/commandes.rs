//! src/app/commandes.rs
//!
//! Colle REPL commune (terminal + fenêtre) : une ligne entre, des lignes de texte sortent.
//!
//! Contrats :
//! - Commandes réservées, insensibles à la casse : C, R, D, L/LS, Q/QUIT.
//! - Ligne vide : rien. Tout le reste (y compris une ligne d’espaces) part au noyau (`calc`).
//! - Après C/R/D ou un calcul (réussi ou non) : on affiche toujours le sommet.
//! - Une erreur du noyau n’est jamais détaillée à l’écran (marque générique), seulement journalisée.

use log::debug;

use crate::noyau::format::{format_pile, format_valeur};
use crate::noyau::Calculatrice;

pub const AU_REVOIR: &str = "au revoir !";
pub const MARQUE_ERREUR: &str = "ERREUR !";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande<'a> {
    Effacer,
    Inverser,
    Retirer,
    Lister,
    Quitter,
    Calcul(&'a str),
    Vide,
}

impl<'a> Commande<'a> {
    pub fn interpreter(ligne: &'a str) -> Self {
        // seule une ligne réellement vide est ignorée ; "   " part au calcul
        if ligne.is_empty() {
            return Commande::Vide;
        }
        let s = ligne.trim();

        match s.to_uppercase().as_str() {
            "C" => Commande::Effacer,
            "R" => Commande::Inverser,
            "D" => Commande::Retirer,
            "L" | "LS" => Commande::Lister,
            "Q" | "QUIT" => Commande::Quitter,
            _ => Commande::Calcul(s),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reponse {
    pub lignes: Vec<String>,
    pub quitter: bool,
}

fn ligne_sommet(calc: &mut Calculatrice) -> String {
    format!("=> {}", format_valeur(calc.last()))
}

pub fn executer(calc: &mut Calculatrice, ligne: &str) -> Reponse {
    let mut rep = Reponse::default();

    match Commande::interpreter(ligne) {
        Commande::Vide => {}
        Commande::Effacer => {
            calc.clear();
            rep.lignes.push(ligne_sommet(calc));
        }
        Commande::Inverser => {
            calc.reverse();
            rep.lignes.push(ligne_sommet(calc));
        }
        Commande::Retirer => {
            calc.pop();
            rep.lignes.push(ligne_sommet(calc));
        }
        Commande::Lister => rep.lignes = format_pile(calc.pile()),
        Commande::Quitter => {
            rep.lignes.push(AU_REVOIR.to_string());
            rep.quitter = true;
        }
        Commande::Calcul(s) => {
            if let Err(e) = calc.calc(s) {
                debug!("{s:?} : {e}");
                rep.lignes.push(MARQUE_ERREUR.to_string());
            }
            rep.lignes.push(ligne_sommet(calc));
        }
    }

    rep
}
