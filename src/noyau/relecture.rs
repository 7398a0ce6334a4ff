// src/noyau/relecture.rs
//
// Relecture d'un nombre (ou d'un vecteur) écrit dans l'un des quatre formats
// de format.rs : parse(format(x)) == x.
//
// - Defaut / Expression : jetons -> RPN -> élément (mêmes règles que la saisie)
// - Zomic : "a0 a1", termes rationnels séparés par des espaces (a1 omis = 0)
// - Vef   : "(a1,a0)", irrationnel en premier ; un rationnel seul est accepté
// - Vecteur : "[c0, c1, ...]", virgules de premier niveau seulement

use num_bigint::BigInt;
use num_traits::Zero;

use super::champ::{Element, QuadraticField, Vecteur};
use super::erreur::{ErreurCorps, ErreurNoyau};
use super::format::FormatNombre;
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};

/// Relit un élément écrit au format `format`.
///
/// # Errors
/// `EntreeVide`, `NombreInvalide`, `ExpressionInvalide`, parenthèses mal
/// fermées, ou toute erreur du pipeline pour Defaut / Expression.
pub fn parse_number<F: QuadraticField>(
    texte: &str,
    format: FormatNombre,
) -> Result<Element<F>, ErreurNoyau> {
    let t = texte.trim();
    if t.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }

    match format {
        FormatNombre::Defaut | FormatNombre::Expression => {
            let rpn = to_rpn(&tokenize(t)?)?;
            from_rpn::<F>(&rpn)
        }
        FormatNombre::Zomic => {
            let termes: Vec<&str> = t.split_whitespace().collect();
            match termes.as_slice() {
                [a0] => element_depuis_termes(a0, "0"),
                [a0, a1] => element_depuis_termes(a0, a1),
                _ => Err(ErreurNoyau::ExpressionInvalide),
            }
        }
        FormatNombre::Vef => {
            if !t.starts_with('(') {
                if t.ends_with(')') {
                    return Err(ErreurNoyau::ParentheseInattendue);
                }
                return element_depuis_termes(t, "0");
            }
            let interieur = t[1..]
                .strip_suffix(')')
                .ok_or(ErreurNoyau::ParenthesesNonFermees)?;
            match interieur.split(',').collect::<Vec<_>>().as_slice() {
                [a1, a0] => element_depuis_termes(a0, a1),
                _ => Err(ErreurNoyau::ExpressionInvalide),
            }
        }
    }
}

/// Relit un vecteur "[c0, c1, ...]" dont chaque composante est au format `format`.
///
/// # Errors
/// `ExpressionInvalide` sans crochets, sinon l'erreur de la première
/// composante illisible.
pub fn parse_vecteur<F: QuadraticField>(
    texte: &str,
    format: FormatNombre,
) -> Result<Vecteur<F>, ErreurNoyau> {
    let interieur = texte
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or(ErreurNoyau::ExpressionInvalide)?;

    if interieur.trim().is_empty() {
        return Ok(Vec::new());
    }

    decoupe_premier_niveau(interieur)?
        .into_iter()
        .map(|c| parse_number::<F>(c, format))
        .collect()
}

/* ------------------------ helpers ------------------------ */

/// "n" ou "n/d" -> (n, d), d non nul.
fn terme_rationnel(s: &str) -> Result<(BigInt, BigInt), ErreurNoyau> {
    let s = s.trim();
    let lire = |x: &str| {
        x.trim()
            .parse::<BigInt>()
            .map_err(|_| ErreurNoyau::NombreInvalide(s.to_string()))
    };

    let (n, d) = match s.split_once('/') {
        Some((n, d)) => (lire(n)?, lire(d)?),
        None => (lire(s)?, BigInt::from(1)),
    };
    if d.is_zero() {
        return Err(ErreurCorps::DenominateurNul.into());
    }
    Ok((n, d))
}

/// a0 + a1·u à partir de deux termes rationnels.
fn element_depuis_termes<F: QuadraticField>(a0: &str, a1: &str) -> Result<Element<F>, ErreurNoyau> {
    let (n0, d0) = terme_rationnel(a0)?;
    let (n1, d1) = terme_rationnel(a1)?;
    Ok(Element::new(n0 * &d1, n1 * &d0, d0 * d1)?)
}

/// Coupe sur les virgules hors parenthèses ("(1,2), (3,4)" -> 2 morceaux).
fn decoupe_premier_niveau(s: &str) -> Result<Vec<&str>, ErreurNoyau> {
    let mut morceaux = Vec::new();
    let mut profondeur = 0usize;
    let mut debut = 0usize;

    for (i, c) in s.char_indices() {
        match c {
            '(' => profondeur += 1,
            ')' => {
                profondeur = profondeur
                    .checked_sub(1)
                    .ok_or(ErreurNoyau::ParentheseInattendue)?;
            }
            ',' if profondeur == 0 => {
                morceaux.push(&s[debut..i]);
                debut = i + 1;
            }
            _ => {}
        }
    }
    if profondeur != 0 {
        return Err(ErreurNoyau::ParenthesesNonFermees);
    }
    morceaux.push(&s[debut..]);
    Ok(morceaux)
}
