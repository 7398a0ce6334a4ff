// src/noyau/serie.rs
//
// Série dorée : système de substitution (mot de Fibonacci) sur deux symboles.
//
//   graine : [1]
//   1 -> [1, φ]
//   φ -> [1]
//
// Longueurs : 1, 2, 3, 5, 8, … (Fibonacci).
//
// Attention : ce n'est pas la variante 1 -> [1], φ -> [1, φ] (qui, partant
// de [1], ne croît jamais). Les valeurs de golden_series diffèrent donc de
// celles de cette variante : profondeur 3, mot 1φ11φ, série
// 1, 1+φ, 2+φ, 3+φ, 3+2φ.
// Séquence : 1 -> (1, 0, 1), φ -> (0, 1, 1) dans le corps doré.
// Série    : sommes partielles (plus), strictement croissantes au plongement.

use std::fmt;

use super::champ::{Element, QuadraticField, Vecteur};
use super::dore::Golden;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbole {
    Un,
    Phi,
}

impl Symbole {
    /// Règle de substitution.
    fn remplacement(self) -> &'static [Symbole] {
        match self {
            Symbole::Un => &[Symbole::Un, Symbole::Phi],
            Symbole::Phi => &[Symbole::Un],
        }
    }

    pub fn valeur(self) -> Element<Golden> {
        match self {
            Symbole::Un => Golden::one(),
            Symbole::Phi => Golden::generator(),
        }
    }
}

impl fmt::Display for Symbole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbole::Un => f.write_str("1"),
            Symbole::Phi => f.write_str("φ"),
        }
    }
}

/// Mot obtenu après `depth` substitutions à partir de [1].
pub fn symbol_sequence(depth: usize) -> Vec<Symbole> {
    let mut seq = vec![Symbole::Un];
    for _ in 0..depth {
        seq = seq.iter().flat_map(|s| s.remplacement().iter().copied()).collect();
    }
    seq
}

pub fn golden_sequence(depth: usize) -> Vecteur<Golden> {
    symbol_sequence(depth).into_iter().map(Symbole::valeur).collect()
}

/// Sommes partielles de la séquence dorée.
pub fn golden_series(depth: usize) -> Vecteur<Golden> {
    let mut out: Vecteur<Golden> = Vec::new();
    for a in golden_sequence(depth) {
        let suivant = match out.last() {
            Some(dernier) => Golden::plus(&a, dernier),
            None => a,
        };
        out.push(suivant);
    }
    out
}

/// Mot en texte compact (ex: "1φ11φ").
pub fn format_symboles(seq: &[Symbole]) -> String {
    seq.iter().map(Symbole::to_string).collect()
}
