//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la fenêtre (entrée, calculatrice, journal) et offrir
//! des opérations simples sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation directe ici : tout passe par `commandes::executer`.
//! - Journal borné (anti-gel sur une longue session).

use super::commandes::{executer, Reponse};
use crate::noyau::{Calculatrice, Grammaire};

/// Garde-fou : nombre maximal de lignes conservées au journal.
const JOURNAL_MAX: usize = 500;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- noyau ---
    pub calc: Calculatrice,

    // --- sorties ---
    pub journal: Vec<String>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
    // Posé par une commande Q/QUIT ; app.rs ferme alors la fenêtre.
    pub quitter: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Grammaire::default())
    }
}

impl AppCalc {
    pub fn new(grammaire: Grammaire) -> Self {
        Self {
            entree: String::new(),
            calc: Calculatrice::avec_grammaire(grammaire),
            journal: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            quitter: false,
        }
    }

    /// Effacer seulement l’entrée (sans toucher à la pile).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    pub fn vider_journal(&mut self) {
        self.journal.clear();
        self.focus_entree = true;
    }

    /// Soumet l’entrée courante puis la vide.
    pub fn soumettre_entree(&mut self) {
        let ligne = std::mem::take(&mut self.entree);
        self.executer(&ligne);
    }

    /// Exécute une ligne (commande ou calcul) et dépose la réponse au journal.
    pub fn executer(&mut self, ligne: &str) -> Reponse {
        let rep = executer(&mut self.calc, ligne);

        if !rep.lignes.is_empty() {
            self.journal.push(format!("> {}", ligne.trim()));
            self.journal.extend(rep.lignes.iter().cloned());
        }
        if self.journal.len() > JOURNAL_MAX {
            let trop = self.journal.len() - JOURNAL_MAX;
            self.journal.drain(..trop);
        }

        self.quitter |= rep.quitter;
        self.focus_entree = true;
        rep
    }

    /// Insère un nom d’opérateur (ou un mot) dans l’entrée, séparé par un espace.
    pub fn inserer(&mut self, mot: &str) {
        if !self.entree.is_empty() && !self.entree.ends_with(char::is_whitespace) {
            self.entree.push(' ');
        }
        self.entree.push_str(mot);
        self.entree.push(' ');
        self.focus_entree = true;
    }
}
