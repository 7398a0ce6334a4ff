// src/noyau/dore.rs
//
// Corps doré Q(φ), φ = (1+√5)/2, φ² = φ + 1.
//
// Règles propres :
// - times      : (a0 + a1φ)(b0 + b1φ) = a0b0 + a1b1 + (a0b1 + a1b0 + a1b1)φ
// - reciprocal : conjugué φ' = 1 - φ, norme a0² + a0a1 - a1²
// - embed      : (a0 + φ·a1) / d en flottant
//
// En plus (corps doré seulement) : groupe icosaédrique en quaternions
// et série dorée.

use num_bigint::BigInt;
use num_traits::Zero;

use super::champ::{plonge, signe_p_plus_q_racine, Element, QuadraticField, Vecteur};
use super::erreur::ErreurCorps;
use super::quaternion::{self, Quaternion};
use super::serie::{self, Symbole};

/// φ en flottant (plongement seulement).
pub const PHI: f64 = 1.618_033_988_749_895;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Golden;

impl QuadraticField for Golden {
    const NAME: &'static str = "golden";
    const SYMBOLE: &'static str = "φ";
    const SYMBOLE_ASCII: &'static str = "phi";
    const ALIAS: &'static [&'static str] = &["phi", "φ"];

    fn times(a: &Element<Self>, b: &Element<Self>) -> Element<Self> {
        let (a0, a1, ad) = (a.a0(), a.a1(), a.d());
        let (b0, b1, bd) = (b.a0(), b.a1(), b.d());
        Element::reduit(
            a0 * b0 + a1 * b1,
            a0 * b1 + a1 * b0 + a1 * b1,
            ad * bd,
        )
    }

    fn reciprocal(a: &Element<Self>) -> Result<Element<Self>, ErreurCorps> {
        let (a0, a1, ad) = (a.a0(), a.a1(), a.d());
        let norme: BigInt = a0 * a0 + a0 * a1 - a1 * a1;
        if norme.is_zero() {
            return Err(ErreurCorps::ReciproqueDeZero);
        }
        Ok(Element::reduit((a0 + a1) * ad, -(a1 * ad), norme))
    }

    fn embed(a: &Element<Self>) -> f64 {
        plonge(a, PHI)
    }

    /// a0 + a1φ = (2a0 + a1 + a1√5) / 2 : signe exact, sans flottant.
    fn sign(a: &Element<Self>) -> i32 {
        let p = BigInt::from(2) * a.a0() + a.a1();
        signe_p_plus_q_racine(&p, a.a1(), 5)
    }
}

impl Golden {
    /// Le nombre d'or lui-même (alias du générateur).
    pub fn golden_ratio() -> Element<Self> {
        Self::generator()
    }

    /// Les 60 rotations icosaédriques (quaternions unitaires canoniques).
    pub fn quaternions() -> &'static [Quaternion] {
        quaternion::quaternions_icosaedriques()
    }

    /// Q · (0, v) · Q̄, partie vectorielle.
    pub fn quat_transform(q: &Quaternion, v: &[Element<Self>]) -> Vecteur<Self> {
        q.transform(v).to_vec()
    }

    pub fn symbol_sequence(depth: usize) -> Vec<Symbole> {
        serie::symbol_sequence(depth)
    }

    pub fn golden_sequence(depth: usize) -> Vecteur<Self> {
        serie::golden_sequence(depth)
    }

    pub fn golden_series(depth: usize) -> Vecteur<Self> {
        serie::golden_series(depth)
    }
}
