//! Tests de la table d’opérateurs : arités, sémantique flottante, domaines.

use super::erreur::{Domaine, ErreurCalc};
use super::operateurs::{chercher, noms, Operateur};

fn op(nom: &str) -> &'static Operateur {
    chercher(nom).unwrap_or_else(|| panic!("opérateur absent: {nom:?}"))
}

fn app(nom: &str, args: &[f64]) -> f64 {
    op(nom)
        .appliquer(args)
        .unwrap_or_else(|e| panic!("{nom} {args:?} err={e}"))
}

fn cause(nom: &str, args: &[f64]) -> Domaine {
    match op(nom).appliquer(args) {
        Err(ErreurCalc::Domaine { cause, .. }) => cause,
        autre => panic!("{nom} {args:?} : attendu erreur de domaine, obtenu {autre:?}"),
    }
}

/* ------------------------ Table ------------------------ */

#[test]
fn arites_declarees() {
    for nom in ["+", "-", "*", "/", "%", "**", "//", "pow"] {
        assert_eq!(op(nom).arite(), 2, "{nom}");
    }
    for nom in [
        "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "floor", "ceil", "abs", "round",
    ] {
        assert_eq!(op(nom).arite(), 1, "{nom}");
    }
    assert_eq!(noms().count(), 19);
}

#[test]
fn recherche_exacte() {
    assert!(chercher("SIN").is_none());
    assert!(chercher(" +").is_none());
    assert!(chercher("^").is_none());
    assert!(chercher("").is_none());
    assert_eq!(op("pow").nom, "pow");
}

#[test]
fn mauvais_nombre_d_arguments() {
    let e = op("+").appliquer(&[1.0]).unwrap_err();
    assert_eq!(
        e,
        ErreurCalc::Arite {
            operateur: "+",
            attendu: 2,
            recu: 1
        }
    );
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn arithmetique_de_base() {
    assert_eq!(app("+", &[3.0, 4.0]), 7.0);
    assert_eq!(app("-", &[3.0, 4.0]), -1.0);
    assert_eq!(app("*", &[3.0, 4.0]), 12.0);
    assert_eq!(app("/", &[3.0, 4.0]), 0.75);

    // pas d’erreur sur dépassement pour + et *
    assert_eq!(app("*", &[1e308, 10.0]), f64::INFINITY);
}

#[test]
fn modulo_signe_du_diviseur() {
    assert_eq!(app("%", &[7.0, 3.0]), 1.0);
    assert_eq!(app("%", &[-7.0, 3.0]), 2.0);
    assert_eq!(app("%", &[7.0, -3.0]), -2.0);
    assert_eq!(app("%", &[-7.0, -3.0]), -1.0);
    assert_eq!(app("%", &[5.5, 2.0]), 1.5);

    let zero = app("%", &[6.0, -3.0]);
    assert_eq!(zero, 0.0);
    assert!(zero.is_sign_negative());
}

#[test]
fn division_entiere_plancher() {
    assert_eq!(app("//", &[7.0, 2.0]), 3.0);
    assert_eq!(app("//", &[-7.0, 2.0]), -4.0);
    assert_eq!(app("//", &[7.0, -2.0]), -4.0);
    assert_eq!(app("//", &[7.5, 2.5]), 3.0);
    assert_eq!(app("//", &[1.0, 3.0]), 0.0);
}

#[test]
fn divisions_par_zero() {
    for nom in ["/", "%", "//"] {
        assert_eq!(cause(nom, &[1.0, 0.0]), Domaine::DivisionParZero, "{nom}");
        assert_eq!(cause(nom, &[1.0, -0.0]), Domaine::DivisionParZero, "{nom}");
    }
}

#[test]
fn puissance() {
    assert_eq!(app("**", &[2.0, 3.0]), 8.0);
    assert_eq!(app("pow", &[2.0, -1.0]), 0.5);
    assert_eq!(app("**", &[-2.0, 3.0]), -8.0);
    assert_eq!(app("**", &[0.0, 0.0]), 1.0);
    assert_eq!(app("**", &[f64::NAN, 0.0]), 1.0);
    assert_eq!(app("**", &[4.0, 0.5]), 2.0);

    assert_eq!(cause("**", &[0.0, -1.0]), Domaine::DivisionParZero);
    assert_eq!(cause("pow", &[-8.0, 1.0 / 3.0]), Domaine::HorsDomaine);
    assert_eq!(cause("**", &[10.0, 400.0]), Domaine::Depassement);
}

/* ------------------------ Fonctions unaires ------------------------ */

#[test]
fn fonctions_usuelles() {
    assert_eq!(app("sqrt", &[9.0]), 3.0);
    assert_eq!(app("abs", &[-2.0]), 2.0);
    assert_eq!(app("floor", &[-1.5]), -2.0);
    assert_eq!(app("ceil", &[-1.5]), -1.0);
    assert_eq!(app("round", &[2.5]), 3.0);
    assert_eq!(app("round", &[-2.5]), -3.0);
    assert_eq!(app("sin", &[0.0]), 0.0);
    assert_eq!(app("cos", &[0.0]), 1.0);
    assert!((app("atan", &[1.0]) - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
    assert!((app("asin", &[1.0]) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    assert_eq!(app("acos", &[1.0]), 0.0);
}

#[test]
fn hors_domaine() {
    assert_eq!(cause("sqrt", &[-1.0]), Domaine::HorsDomaine);
    assert_eq!(cause("asin", &[2.0]), Domaine::HorsDomaine);
    assert_eq!(cause("acos", &[-1.5]), Domaine::HorsDomaine);
    assert_eq!(cause("sin", &[f64::INFINITY]), Domaine::HorsDomaine);
    assert_eq!(cause("tan", &[f64::NEG_INFINITY]), Domaine::HorsDomaine);
}

#[test]
fn nan_propage_sans_erreur() {
    assert!(app("sqrt", &[f64::NAN]).is_nan());
    assert!(app("sin", &[f64::NAN]).is_nan());
    assert_eq!(app("sqrt", &[f64::INFINITY]), f64::INFINITY);
    assert_eq!(app("sqrt", &[-0.0]), 0.0);
}

#[test]
fn erreur_porte_le_nom_de_l_operateur() {
    let e = op("//").appliquer(&[1.0, 0.0]).unwrap_err();
    assert_eq!(e.to_string(), "// : division par zéro");
}
