// src/noyau/format.rs
//
// Affichage EXACT d'un élément (a0 + a1·u)/d, quatre formats :
// - Defaut     : 4 +3φ, (1 +φ)/2, φ/2, -3√2
// - Expression : 4 +3*phi, (1 +phi)/2, 3*sqrt2   (ASCII, relisible par jetons.rs)
// - Zomic      : 4 3, 1/2 1/2                   (termes rationnels séparés)
// - Vef        : (3,4), (1/2,1/2)                (irrationnel en premier)

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::champ::{Element, QuadraticField};
use super::quaternion::Quaternion;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FormatNombre {
    #[default]
    Defaut,
    Expression,
    Zomic,
    Vef,
}

impl FormatNombre {
    pub const TOUS: [FormatNombre; 4] = [
        FormatNombre::Defaut,
        FormatNombre::Expression,
        FormatNombre::Zomic,
        FormatNombre::Vef,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            FormatNombre::Defaut => "défaut",
            FormatNombre::Expression => "expression",
            FormatNombre::Zomic => "zomic",
            FormatNombre::Vef => "vef",
        }
    }
}

/* ------------------------ Helpers rationnels ------------------------ */

/// n/d réduit : "n" si d = 1.
fn format_rat_pretty(n: &BigInt, d: &BigInt) -> String {
    let r = BigRational::new(n.clone(), d.clone());
    let (n, d) = (r.numer(), r.denom());
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// k·u : "φ", "-φ", "3φ" (ou "phi", "-phi", "3*phi" si `etoile`).
fn format_terme_irrationnel(k: &BigInt, symbole: &str, etoile: bool) -> String {
    if k.is_one() {
        return symbole.to_string();
    }
    if k == &BigInt::from(-1) {
        return format!("-{symbole}");
    }
    if etoile {
        format!("{k}*{symbole}")
    } else {
        format!("{k}{symbole}")
    }
}

fn format_joli(a0: &BigInt, a1: &BigInt, d: &BigInt, symbole: &str, etoile: bool) -> String {
    let deux_termes = !a0.is_zero() && !a1.is_zero();

    let num = match (a0.is_zero(), a1.is_zero()) {
        (true, true) => return "0".to_string(),
        (false, true) => a0.to_string(),
        (true, false) => format_terme_irrationnel(a1, symbole, etoile),
        (false, false) => {
            let t = format_terme_irrationnel(&a1.abs(), symbole, etoile);
            if a1.is_negative() {
                format!("{a0} -{t}")
            } else {
                format!("{a0} +{t}")
            }
        }
    };

    if d.is_one() {
        num
    } else if deux_termes {
        format!("({num})/{d}")
    } else {
        format!("{num}/{d}")
    }
}

/* ------------------------ API ------------------------ */

pub fn format_element<F: QuadraticField>(e: &Element<F>, format: FormatNombre) -> String {
    let (a0, a1, d) = (e.a0(), e.a1(), e.d());
    match format {
        FormatNombre::Defaut => format_joli(a0, a1, d, F::SYMBOLE, false),
        FormatNombre::Expression => format_joli(a0, a1, d, F::SYMBOLE_ASCII, true),
        FormatNombre::Zomic => format!("{} {}", format_rat_pretty(a0, d), format_rat_pretty(a1, d)),
        FormatNombre::Vef => format!("({},{})", format_rat_pretty(a1, d), format_rat_pretty(a0, d)),
    }
}

/// Triplet brut canonique : "(a0, a1, d)".
pub fn format_triplet<F>(e: &Element<F>) -> String {
    format!("({}, {}, {})", e.a0(), e.a1(), e.d())
}

pub fn format_vecteur<F: QuadraticField>(v: &[Element<F>], format: FormatNombre) -> String {
    let items: Vec<String> = v.iter().map(|c| format_element(c, format)).collect();
    format!("[{}]", items.join(", "))
}

pub fn format_quaternion(q: &Quaternion, format: FormatNombre) -> String {
    format_vecteur(q.composantes(), format)
}

impl<F: QuadraticField> fmt::Display for Element<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_element(self, FormatNombre::Defaut))
    }
}
