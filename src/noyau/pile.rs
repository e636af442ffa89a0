// src/noyau/pile.rs
//
// Évaluateur à pile (RPN) :
// - la pile est un Vec<f64> possédé exclusivement par une Calculatrice
// - toute lecture du sommet sur pile vide y dépose d’abord 0.0 (auto-amorçage)
// - une ligne est traitée jeton par jeton ; la première erreur abandonne le reste
//   de la ligne, sans annuler ce qui a déjà été empilé

use log::{debug, trace, warn};
use num_traits::ToPrimitive;

use super::erreur::ErreurCalc;
use super::jetons::{classer, decouper, Grammaire, Jeton};
use super::operateurs::chercher;

#[derive(Clone, Debug, PartialEq)]
pub struct Calculatrice {
    pile: Vec<f64>,
    grammaire: Grammaire,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::avec_grammaire(Grammaire::default())
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_grammaire(grammaire: Grammaire) -> Self {
        Self {
            pile: vec![0.0],
            grammaire,
        }
    }

    pub fn grammaire(&self) -> Grammaire {
        self.grammaire
    }

    /// Contenu de la pile, le bas d’abord.
    pub fn pile(&self) -> &[f64] {
        &self.pile
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /* ------------------------ Opérations de pile ------------------------ */

    pub fn push<V: ToPrimitive>(&mut self, valeur: V) -> Result<&mut Self, ErreurCalc> {
        let x = valeur.to_f64().ok_or_else(|| ErreurCalc::Conversion {
            valeur: "<non représentable>".into(),
        })?;
        self.pile.push(x);
        Ok(self)
    }

    /// Empile un texte converti en flottant (espaces de bord ignorés).
    pub fn push_texte(&mut self, texte: &str) -> Result<&mut Self, ErreurCalc> {
        let x: f64 = texte
            .trim()
            .parse()
            .map_err(|_| ErreurCalc::Conversion {
                valeur: texte.to_string(),
            })?;
        self.pile.push(x);
        Ok(self)
    }

    /// Lit le sommet puis retire le dernier élément.
    /// Sur pile vide : amorce 0.0, le renvoie, et la pile redevient vide.
    pub fn pop(&mut self) -> f64 {
        let sommet = self.last();
        self.pile.pop();
        sommet
    }

    /// Sommet sans le retirer ; amorce 0.0 si la pile est vide.
    pub fn last(&mut self) -> f64 {
        if self.pile.is_empty() {
            self.pile.push(0.0);
        }
        self.pile[self.pile.len() - 1]
    }

    pub fn clear(&mut self) -> &mut Self {
        self.pile.clear();
        self.pile.push(0.0);
        self
    }

    /// Échange les deux éléments du sommet (les manquants valent 0.0).
    pub fn reverse(&mut self) -> &mut Self {
        let v1 = self.pop();
        let v2 = self.pop();
        self.pile.push(v1);
        self.pile.push(v2);
        self
    }

    /* ------------------------ Évaluation ------------------------ */

    pub fn calc(&mut self, ligne: &str) -> Result<&mut Self, ErreurCalc> {
        for texte in decouper(ligne) {
            trace!("jeton {texte:?}");
            match classer(texte, self.grammaire) {
                Jeton::Nombre(t) => {
                    self.push_texte(t)?;
                }
                Jeton::Operateur(op) => {
                    self.operate(op.nom)?;
                }
                Jeton::Inconnu(t) => {
                    debug!("ligne abandonnée sur {t:?}");
                    return Err(ErreurCalc::OperateurInconnu {
                        jeton: t.to_string(),
                    });
                }
            }
        }
        Ok(self)
    }

    /// Dépile n valeurs (n = arité), les remet dans l’ordre de la pile, applique,
    /// empile le résultat. Nom inconnu : aucun effet.
    pub fn operate(&mut self, nom: &str) -> Result<&mut Self, ErreurCalc> {
        let Some(op) = chercher(nom) else {
            warn!("opérateur {nom:?} sans arité connue, ignoré");
            return Ok(self);
        };

        let mut args: Vec<f64> = (0..op.arite()).map(|_| self.pop()).collect();
        args.reverse();

        let resultat = op.appliquer(&args).inspect_err(|e| debug!("{e}"))?;
        debug!("{} {:?} = {}", op.nom, args, resultat);

        self.push(resultat)
    }
}
