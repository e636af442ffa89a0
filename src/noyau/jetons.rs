// src/noyau/jetons.rs
//
// Découpage d’une ligne en jetons + classement (littéral / opérateur / inconnu).
//
// NOTE grammaire historique : le signe d’exposant se place AVANT la lettre
// ("1.5-e10"), pas après. Conservée telle quelle par défaut ; la forme
// conventionnelle ("1.5e-10") est disponible via Grammaire::Conventionnelle.

use std::sync::OnceLock;

use regex::Regex;

use super::operateurs::{chercher, Operateur};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Grammaire {
    #[default]
    Historique,
    Conventionnelle,
}

#[derive(Clone, Copy, Debug)]
pub enum Jeton<'a> {
    Nombre(&'a str),
    Operateur(&'static Operateur),
    Inconnu(&'a str),
}

// Chiffres ASCII seulement ([0-9], pas \d qui est Unicode).
const MOTIF_HISTORIQUE: &str = r"^[-+]?[0-9]+(?:\.[0-9]+)?(?:[-+]?[eE][0-9]+)?$";
const MOTIF_CONVENTIONNEL: &str = r"^[-+]?[0-9]+(?:\.[0-9]+)?(?:[eE][-+]?[0-9]+)?$";

static RE_HISTORIQUE: OnceLock<Regex> = OnceLock::new();
static RE_CONVENTIONNEL: OnceLock<Regex> = OnceLock::new();

fn motif(grammaire: Grammaire) -> &'static Regex {
    let (cellule, source) = match grammaire {
        Grammaire::Historique => (&RE_HISTORIQUE, MOTIF_HISTORIQUE),
        Grammaire::Conventionnelle => (&RE_CONVENTIONNEL, MOTIF_CONVENTIONNEL),
    };
    cellule.get_or_init(|| Regex::new(source).expect("motif littéral valide"))
}

/// Vrai si le jeton entier est un littéral numérique.
pub fn est_nombre(texte: &str, grammaire: Grammaire) -> bool {
    motif(grammaire).is_match(texte)
}

/// Blancs ASCII séparateurs (espace, \t, \n, \r, \x0b, \x0c) ; U+00A0 et consorts
/// restent dans le jeton.
fn est_blanc(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Découpe sur les blancs ASCII ; jamais de jeton vide.
pub fn decouper(ligne: &str) -> impl Iterator<Item = &str> {
    ligne.split(est_blanc).filter(|t| !t.is_empty())
}

/// Un littéral l’emporte sur un nom d’opérateur.
pub fn classer(texte: &str, grammaire: Grammaire) -> Jeton<'_> {
    if est_nombre(texte, grammaire) {
        Jeton::Nombre(texte)
    } else if let Some(op) = chercher(texte) {
        Jeton::Operateur(op)
    } else {
        Jeton::Inconnu(texte)
    }
}
