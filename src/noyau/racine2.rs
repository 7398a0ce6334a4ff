// src/noyau/racine2.rs
//
// Corps Q(√2), u = √2, u² = 2.
// Mêmes canonicalisation et opérations génériques que le corps doré :
// seules les trois règles ci-dessous changent.

use num_bigint::BigInt;
use num_traits::Zero;

use super::champ::{plonge, signe_p_plus_q_racine, Element, QuadraticField};
use super::erreur::ErreurCorps;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct RootTwo;

impl QuadraticField for RootTwo {
    const NAME: &'static str = "rootTwo";
    const SYMBOLE: &'static str = "√2";
    const SYMBOLE_ASCII: &'static str = "sqrt2";
    const ALIAS: &'static [&'static str] = &["sqrt2", "√2", "r2"];

    fn times(a: &Element<Self>, b: &Element<Self>) -> Element<Self> {
        let (a0, a1, ad) = (a.a0(), a.a1(), a.d());
        let (b0, b1, bd) = (b.a0(), b.a1(), b.d());
        Element::reduit(
            a0 * b0 + BigInt::from(2) * a1 * b1,
            a0 * b1 + a1 * b0,
            ad * bd,
        )
    }

    fn reciprocal(x: &Element<Self>) -> Result<Element<Self>, ErreurCorps> {
        let (a, b, c) = (x.a0(), x.a1(), x.d());
        let norme: BigInt = a * a - BigInt::from(2) * b * b;
        if norme.is_zero() {
            return Err(ErreurCorps::ReciproqueDeZero);
        }
        Ok(Element::reduit(a * c, -(b * c), norme))
    }

    fn embed(a: &Element<Self>) -> f64 {
        plonge(a, std::f64::consts::SQRT_2)
    }

    /// Signe exact : a0² comparé à 2·a1².
    fn sign(a: &Element<Self>) -> i32 {
        signe_p_plus_q_racine(a.a0(), a.a1(), 2)
    }
}
