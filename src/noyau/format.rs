// src/noyau/format.rs
//
// Affichage des valeurs de la pile.
// Forme courte “aller-retour” (la plus courte qui relit la même valeur),
// toujours avec une partie décimale : 7.0, 0.5, 1e+20, 1e-05, inf, nan.

/// Seuils de passage en notation scientifique.
const SCI_MAX: f64 = 1e16;
const SCI_MIN: f64 = 1e-4;

pub fn format_valeur(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let a = x.abs();
    if a != 0.0 && !(SCI_MIN..SCI_MAX).contains(&a) {
        return format_scientifique(x);
    }

    let mut s = format!("{x}");
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// `{:e}` donne "1e20" / "1.5e-7" ; on normalise l’exposant en "+20" / "-07".
fn format_scientifique(x: f64) -> String {
    let brut = format!("{x:e}");
    let Some((mantisse, exposant)) = brut.split_once('e') else {
        return brut;
    };

    let (signe, chiffres) = match exposant.strip_prefix('-') {
        Some(c) => ('-', c),
        None => ('+', exposant),
    };
    format!("{mantisse}e{signe}{chiffres:0>2}")
}

/// Listing complet : bas de pile en premier, étiquette = distance au sommet.
pub fn format_pile(pile: &[f64]) -> Vec<String> {
    let n = pile.len();
    pile.iter()
        .enumerate()
        .map(|(i, v)| format!("[{}] {}", n - i - 1, format_valeur(*v)))
        .collect()
}
