// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau.
// Le noyau ne rattrape jamais ses propres erreurs : tout remonte à l’appelant.

use thiserror::Error;

/// Échec d’une fonction numérique (indépendant du nom de l’opérateur).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Domaine {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("argument hors domaine")]
    HorsDomaine,

    #[error("dépassement de capacité")]
    Depassement,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    /// Ni littéral numérique, ni opérateur connu. La ligne est abandonnée.
    #[error("opérateur '{jeton}' non défini")]
    OperateurInconnu { jeton: String },

    #[error("{operateur} : {cause}")]
    Domaine {
        operateur: &'static str,
        cause: Domaine,
    },

    #[error("conversion impossible en flottant : '{valeur}'")]
    Conversion { valeur: String },

    #[error("{operateur} attend {attendu} argument(s), reçu {recu}")]
    Arite {
        operateur: &'static str,
        attendu: usize,
        recu: usize,
    },
}
