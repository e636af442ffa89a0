//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la Calculatrice sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - lignes de longueur bornée
//! - budget temps global
//! - toutes les erreurs sont acceptées, mais jamais de panique
//! - invariant clé : après last(), la pile n’est jamais vide

use std::time::{Duration, Instant};

use super::operateurs::noms;
use super::{Calculatrice, ErreurCalc, Grammaire};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de jetons ------------------------ */

const INCONNUS: [&str; 5] = ["foo", "SIN", "^", "1e-5", "pi"];

fn gen_nombre(rng: &mut Rng) -> String {
    let n = rng.pick(20) as i32 - 5;
    match rng.pick(5) {
        0 => format!("{n}.5"),
        1 => format!("{n}e2"),
        2 => format!("{n}-e1"), // littéral historique non convertible
        _ => format!("{n}"),
    }
}

fn gen_jeton(rng: &mut Rng, operateurs: &[&'static str]) -> String {
    match rng.pick(10) {
        0..=3 => gen_nombre(rng),
        4..=8 => operateurs[rng.pick(operateurs.len() as u32) as usize].to_string(),
        _ => INCONNUS[rng.pick(INCONNUS.len() as u32) as usize].to_string(),
    }
}

fn gen_ligne(rng: &mut Rng, operateurs: &[&'static str]) -> String {
    let n = rng.pick(8);
    (0..n)
        .map(|_| gen_jeton(rng, operateurs))
        .collect::<Vec<_>>()
        .join(" ")
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_lignes_aleatoires() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let operateurs: Vec<&'static str> = noms().collect();

    for grammaire in [Grammaire::Historique, Grammaire::Conventionnelle] {
        let mut rng = Rng::new(0xC0FFEE);
        let mut c = Calculatrice::avec_grammaire(grammaire);

        for _ in 0..3000 {
            budget(start, max);
            let ligne = gen_ligne(&mut rng, &operateurs);

            match c.calc(&ligne) {
                Ok(_) => {}
                Err(ErreurCalc::OperateurInconnu { jeton }) => {
                    assert!(ligne.split_whitespace().any(|t| t == jeton), "ligne={ligne:?}");
                }
                Err(ErreurCalc::Conversion { valeur }) => {
                    assert!(valeur.contains("-e"), "ligne={ligne:?}");
                }
                Err(ErreurCalc::Domaine { .. }) => {}
                Err(e @ ErreurCalc::Arite { .. }) => panic!("ligne={ligne:?} err={e}"),
            }

            c.last();
            assert!(!c.is_empty(), "ligne={ligne:?}");

            // bornage de la pile (les nombres s’accumulent sinon)
            if c.len() > 64 {
                c.clear();
            }
        }
    }
}

#[test]
fn fuzz_commandes_de_pile() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);
    let mut c = Calculatrice::new();

    for _ in 0..5000 {
        budget(start, max);
        let avant = c.len();
        match rng.pick(5) {
            0 => {
                c.pop();
                assert!(c.len() <= avant.max(1));
            }
            1 => {
                c.reverse();
                assert_eq!(c.len(), avant.max(2));
            }
            2 => {
                c.clear();
                assert_eq!(c.pile(), &[0.0]);
            }
            3 => {
                c.push(rng.pick(100)).unwrap();
                assert_eq!(c.len(), avant + 1);
            }
            _ => {
                let a = c.last();
                assert_eq!(c.last(), a);
                assert_eq!(c.len(), avant.max(1));
            }
        }
        if c.len() > 64 {
            c.clear();
        }
    }
}

#[test]
fn fuzz_deterministe() {
    let operateurs: Vec<&'static str> = noms().collect();
    let run = || {
        let mut rng = Rng::new(7);
        let mut c = Calculatrice::new();
        for _ in 0..500 {
            let ligne = gen_ligne(&mut rng, &operateurs);
            let _ = c.calc(&ligne);
            if c.len() > 64 {
                c.clear();
            }
        }
        c.pile().iter().map(|v| v.to_bits()).collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
