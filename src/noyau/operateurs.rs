// src/noyau/operateurs.rs
//
// Table des opérateurs : nom -> (arité, fonction pure).
//
// Règles:
// - L’arité est portée par la variante (Unaire / Binaire), déclarée statiquement.
// - La table est construite une seule fois (OnceLock) puis n’est plus jamais modifiée.
// - Sémantique flottante alignée sur la calculatrice d’origine :
//     division / modulo / division entière par zéro => erreur,
//     modulo du signe du diviseur, puissance avec contrôles de domaine.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::erreur::{Domaine, ErreurCalc};

pub type Resultat = Result<f64, Domaine>;

#[derive(Clone, Copy)]
pub enum Fonction {
    Unaire(fn(f64) -> Resultat),
    Binaire(fn(f64, f64) -> Resultat),
}

impl Fonction {
    pub fn arite(&self) -> usize {
        match self {
            Fonction::Unaire(_) => 1,
            Fonction::Binaire(_) => 2,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Operateur {
    pub nom: &'static str,
    pub fonction: Fonction,
}

impl Operateur {
    pub fn arite(&self) -> usize {
        self.fonction.arite()
    }

    /// Applique l’opérateur. `args` est dans l’ordre de la pile (le plus ancien d’abord).
    pub fn appliquer(&self, args: &[f64]) -> Result<f64, ErreurCalc> {
        let brut = match (self.fonction, args) {
            (Fonction::Unaire(f), [x]) => f(*x),
            (Fonction::Binaire(f), [a, b]) => f(*a, *b),
            _ => {
                return Err(ErreurCalc::Arite {
                    operateur: self.nom,
                    attendu: self.arite(),
                    recu: args.len(),
                })
            }
        };

        brut.map_err(|cause| ErreurCalc::Domaine {
            operateur: self.nom,
            cause,
        })
    }
}

impl std::fmt::Debug for Operateur {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Operateur({}, arité {})", self.nom, self.arite())
    }
}

/* ------------------------ Table ------------------------ */

static OPERATEURS: [Operateur; 19] = [
    Operateur { nom: "+", fonction: Fonction::Binaire(|a, b| Ok(a + b)) },
    Operateur { nom: "-", fonction: Fonction::Binaire(|a, b| Ok(a - b)) },
    Operateur { nom: "*", fonction: Fonction::Binaire(|a, b| Ok(a * b)) },
    Operateur { nom: "/", fonction: Fonction::Binaire(division) },
    Operateur { nom: "%", fonction: Fonction::Binaire(modulo) },
    Operateur { nom: "**", fonction: Fonction::Binaire(puissance) },
    Operateur { nom: "//", fonction: Fonction::Binaire(division_entiere) },
    Operateur { nom: "pow", fonction: Fonction::Binaire(puissance) },
    Operateur { nom: "sin", fonction: Fonction::Unaire(|x| math_1(x, f64::sin)) },
    Operateur { nom: "cos", fonction: Fonction::Unaire(|x| math_1(x, f64::cos)) },
    Operateur { nom: "tan", fonction: Fonction::Unaire(|x| math_1(x, f64::tan)) },
    Operateur { nom: "asin", fonction: Fonction::Unaire(|x| math_1(x, f64::asin)) },
    Operateur { nom: "acos", fonction: Fonction::Unaire(|x| math_1(x, f64::acos)) },
    Operateur { nom: "atan", fonction: Fonction::Unaire(|x| math_1(x, f64::atan)) },
    Operateur { nom: "sqrt", fonction: Fonction::Unaire(|x| math_1(x, f64::sqrt)) },
    Operateur { nom: "floor", fonction: Fonction::Unaire(|x| Ok(x.floor())) },
    Operateur { nom: "ceil", fonction: Fonction::Unaire(|x| Ok(x.ceil())) },
    Operateur { nom: "abs", fonction: Fonction::Unaire(|x| Ok(x.abs())) },
    // round : moitié loin de zéro (f64::round)
    Operateur { nom: "round", fonction: Fonction::Unaire(|x| Ok(x.round())) },
];

static INDEX: OnceLock<HashMap<&'static str, &'static Operateur>> = OnceLock::new();

/// Recherche exacte (sensible à la casse).
pub fn chercher(nom: &str) -> Option<&'static Operateur> {
    INDEX
        .get_or_init(|| OPERATEURS.iter().map(|op| (op.nom, op)).collect())
        .get(nom)
        .copied()
}

/// Tous les noms, dans l’ordre de déclaration.
pub fn noms() -> impl Iterator<Item = &'static str> {
    OPERATEURS.iter().map(|op| op.nom)
}

/* ------------------------ Fonctions ------------------------ */

/// Fonction mathématique unaire : NaN sorti d’une entrée non-NaN => hors domaine,
/// infini sorti d’une entrée finie => dépassement.
fn math_1(x: f64, f: fn(f64) -> f64) -> Resultat {
    let r = f(x);
    if r.is_nan() && !x.is_nan() {
        return Err(Domaine::HorsDomaine);
    }
    if r.is_infinite() && x.is_finite() {
        return Err(Domaine::Depassement);
    }
    Ok(r)
}

fn division(a: f64, b: f64) -> Resultat {
    if b == 0.0 {
        return Err(Domaine::DivisionParZero);
    }
    Ok(a / b)
}

/// (quotient entier, reste) — reste du signe du diviseur.
fn divmod(a: f64, b: f64) -> Result<(f64, f64), Domaine> {
    if b == 0.0 {
        return Err(Domaine::DivisionParZero);
    }

    // `%` sur f64 = fmod (signe du dividende)
    let mut reste = a % b;
    let mut div = (a - reste) / b;

    if reste != 0.0 {
        if (b < 0.0) != (reste < 0.0) {
            reste += b;
            div -= 1.0;
        }
    } else {
        reste = 0.0f64.copysign(b);
    }

    let quotient = if div != 0.0 {
        let mut q = div.floor();
        if div - q > 0.5 {
            q += 1.0;
        }
        q
    } else {
        0.0f64.copysign(a / b)
    };

    Ok((quotient, reste))
}

fn modulo(a: f64, b: f64) -> Resultat {
    divmod(a, b).map(|(_, reste)| reste)
}

fn division_entiere(a: f64, b: f64) -> Resultat {
    divmod(a, b).map(|(quotient, _)| quotient)
}

fn puissance(x: f64, y: f64) -> Resultat {
    if y == 0.0 {
        return Ok(1.0);
    }
    if x == 0.0 && y < 0.0 && y.is_finite() {
        return Err(Domaine::DivisionParZero);
    }
    if x < 0.0 && x.is_finite() && y.is_finite() && y != y.floor() {
        return Err(Domaine::HorsDomaine);
    }

    let r = x.powf(y);
    if r.is_infinite() && x.is_finite() && y.is_finite() {
        return Err(Domaine::Depassement);
    }
    Ok(r)
}
