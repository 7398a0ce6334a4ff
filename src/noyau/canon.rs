// src/noyau/canon.rs
//
// Canonicalisation forte (déterministe) d'un triplet rationnel :
// - (v0, v1, v2) représente (v0 + v1·u) / v2, u = générateur du corps
// - extraction des signes, repli du signe du dénominateur sur v0 et v1
// - division par pgcd(|v0|, |v1|, |v2|)
// - dénominateur toujours > 0
//
// Invariant : deux valeurs réelles égales donnent des triplets identiques bit à bit.
// C'est ce qui permet d'utiliser un élément comme clef de dictionnaire.
//
// Note : un dénominateur nul est refusé explicitement (pas de NaN/∞ silencieux).

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{FromPrimitive, Signed, Zero};

use super::erreur::ErreurCorps;

/// Triplet (a0, a1, d) brut ou canonique.
pub type Triplet = (BigInt, BigInt, BigInt);

/// pgcd(|a|, |b|) ; pgcd(0, n) = |n| ; pgcd(0, 0) = 0.
pub fn pgcd(a: &BigInt, b: &BigInt) -> BigInt {
    a.gcd(b)
}

/// Canonicalise un triplet dont le dénominateur est connu non nul.
///
/// Réservé aux opérations internes (plus, times, …) où `v2` est un produit
/// de dénominateurs déjà canoniques, donc strictement positif.
pub(crate) fn reduit3(v0: BigInt, v1: BigInt, v2: BigInt) -> Triplet {
    debug_assert!(!v2.is_zero(), "reduit3 : dénominateur nul");

    // signes (-1, 0, +1)
    let s2 = v2.signum();
    let s0 = v0.signum() * &s2;
    let s1 = v1.signum() * &s2;

    let (m0, m1, m2) = (v0.abs(), v1.abs(), v2.abs());

    let g = pgcd(&pgcd(&m0, &m1), &m2);

    (s0 * (m0 / &g), s1 * (m1 / &g), m2 / g)
}

/// Canonicalise un triplet quelconque d'entiers.
///
/// # Errors
/// `ErreurCorps::DenominateurNul` si `v2 == 0`.
pub fn simplify3(v0: BigInt, v1: BigInt, v2: BigInt) -> Result<Triplet, ErreurCorps> {
    if v2.is_zero() {
        return Err(ErreurCorps::DenominateurNul);
    }
    Ok(reduit3(v0, v1, v2))
}

/// Variante “frontière” : les composantes arrivent en flottants (saisie, import).
/// Toute composante non entière ou non finie est une violation de contrat.
///
/// # Errors
/// `ErreurCorps::NonEntier` ou `ErreurCorps::DenominateurNul`.
pub fn simplify3_f64(v0: f64, v1: f64, v2: f64) -> Result<Triplet, ErreurCorps> {
    let entier = |v: f64| -> Result<BigInt, ErreurCorps> {
        if !v.is_finite() || v.fract() != 0.0 {
            return Err(ErreurCorps::NonEntier(format!("{v0} {v1} {v2}")));
        }
        BigInt::from_f64(v).ok_or_else(|| ErreurCorps::NonEntier(format!("{v0} {v1} {v2}")))
    };

    simplify3(entier(v0)?, entier(v1)?, entier(v2)?)
}
