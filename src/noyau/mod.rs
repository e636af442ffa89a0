//! Noyau RPN
//!
//! Organisation interne :
//! - operateurs.rs : table nom -> (arité, fonction pure)
//! - jetons.rs     : découpage + grammaire des littéraux
//! - pile.rs       : Calculatrice (pile + évaluation d’une ligne)
//! - format.rs     : affichage des valeurs / listing de pile
//! - erreur.rs     : taxonomie des erreurs

pub mod erreur;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod pile;


#[cfg(test)]
mod tests_operateurs;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{Domaine, ErreurCalc};
pub use jetons::Grammaire;
pub use pile::Calculatrice;
