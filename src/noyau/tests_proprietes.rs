//! Tests de propriétés (proptest) : axiomes de corps sur les triplets canoniques.
//!
//! Les égalités sont exactes (triplets), le plongement flottant n'est
//! comparé qu'avec une tolérance relative.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use proptest::prelude::*;

use super::champ::{Element, QuadraticField};
use super::dore::Golden;
use super::erreur::ErreurCorps;
use super::format::{format_element, format_vecteur, FormatNombre};
use super::racine2::RootTwo;
use super::relecture::{parse_number, parse_vecteur};

fn triplet() -> impl Strategy<Value = (i64, i64, i64)> {
    (-60i64..60, -60i64..60, prop_oneof![1i64..40, -40i64..-1])
}

fn element<F: QuadraticField>() -> impl Strategy<Value = Element<F>> {
    triplet().prop_map(|(a0, a1, d)| Element::new(a0, a1, d).unwrap())
}

fn non_nul<F: QuadraticField>() -> impl Strategy<Value = Element<F>> {
    element::<F>().prop_filter("non nul", |e| !e.is_zero())
}

fn proche(x: f64, y: f64) -> bool {
    (x - y).abs() <= 1e-9 * (1.0 + x.abs().max(y.abs()))
}

// =============================================================================
// Forme canonique
// =============================================================================

proptest! {
    /// d > 0 et pgcd(|a0|, |a1|, d) = 1
    #[test]
    fn prop_canonique((a0, a1, d) in triplet()) {
        let e = Element::<Golden>::new(a0, a1, d).unwrap();
        prop_assert!(e.d().is_positive());
        let g = e.a0().gcd(e.a1()).gcd(e.d());
        prop_assert!(g.is_one());
    }

    /// (k·a0, k·a1, k·d) désigne le même élément pour tout k non nul
    #[test]
    fn prop_unicite_par_echelle((a0, a1, d) in triplet(), k in prop_oneof![1i64..25, -25i64..-1]) {
        let e = Element::<RootTwo>::new(a0, a1, d).unwrap();
        let f = Element::<RootTwo>::new(a0 * k, a1 * k, d * k).unwrap();
        prop_assert_eq!(e, f);
    }

    /// dénominateur nul toujours refusé
    #[test]
    fn prop_denominateur_nul(a0 in -100i64..100, a1 in -100i64..100) {
        prop_assert_eq!(
            Element::<Golden>::new(a0, a1, 0),
            Err(ErreurCorps::DenominateurNul)
        );
    }
}

// =============================================================================
// Axiomes (corps doré)
// =============================================================================

proptest! {
    #[test]
    fn prop_dore_commutativite(a in element::<Golden>(), b in element::<Golden>()) {
        prop_assert_eq!(Golden::plus(&a, &b), Golden::plus(&b, &a));
        prop_assert_eq!(Golden::times(&a, &b), Golden::times(&b, &a));
    }

    #[test]
    fn prop_dore_associativite(
        a in element::<Golden>(),
        b in element::<Golden>(),
        c in element::<Golden>(),
    ) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn prop_dore_distributivite(
        a in element::<Golden>(),
        b in element::<Golden>(),
        c in element::<Golden>(),
    ) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn prop_dore_opposes(a in element::<Golden>()) {
        prop_assert_eq!(&a + &Golden::negate(&a), Golden::zero());
        prop_assert_eq!(Golden::minus(&a, &a), Golden::zero());
        prop_assert_eq!(Golden::negate(&Golden::negate(&a)), a);
    }

    #[test]
    fn prop_dore_inverse(a in non_nul::<Golden>()) {
        let inv = Golden::reciprocal(&a).unwrap();
        prop_assert_eq!(Golden::times(&a, &inv), Golden::one());
        prop_assert_eq!(Golden::divide(&a, &a).unwrap(), Golden::one());
    }

    #[test]
    fn prop_dore_puissances(a in non_nul::<Golden>(), m in -4i64..5, n in -4i64..5) {
        let pm = Golden::power(&a, m).unwrap();
        let pn = Golden::power(&a, n).unwrap();
        prop_assert_eq!(Golden::power(&a, m + n).unwrap(), Golden::times(&pm, &pn));
    }

    /// le plongement est un morphisme (à la tolérance flottante près)
    #[test]
    fn prop_dore_plongement(a in element::<Golden>(), b in element::<Golden>()) {
        let (fa, fb) = (Golden::embed(&a), Golden::embed(&b));
        prop_assert!(proche(Golden::embed(&Golden::plus(&a, &b)), fa + fb));
        prop_assert!(proche(Golden::embed(&Golden::times(&a, &b)), fa * fb));
    }

    /// sign suit le plongement
    #[test]
    fn prop_dore_signe(a in element::<Golden>()) {
        let f = Golden::embed(&a);
        let s = Golden::sign(&a);
        prop_assert_eq!(s, if a.is_zero() { 0 } else if f > 0.0 { 1 } else { -1 });
        prop_assert_eq!(Golden::sign(&Golden::negate(&a)), -s);
    }

    /// signe multiplicatif, y compris sur des puissances où le plongement s'effondre
    #[test]
    fn prop_dore_signe_des_grandes_puissances(a in non_nul::<Golden>(), n in 30i64..60) {
        let s = Golden::sign(&a);
        let p = Golden::power(&a, n).unwrap();
        let attendu = if n % 2 == 0 { 1 } else { s };
        prop_assert_eq!(Golden::sign(&p), attendu);
        prop_assert_eq!(Golden::sign(&Golden::times(&p, &a)), if n % 2 == 0 { s } else { 1 });
    }
}

// =============================================================================
// Axiomes (Q(√2))
// =============================================================================

proptest! {
    #[test]
    fn prop_racine2_anneau(
        a in element::<RootTwo>(),
        b in element::<RootTwo>(),
        c in element::<RootTwo>(),
    ) {
        prop_assert_eq!(RootTwo::times(&a, &b), RootTwo::times(&b, &a));
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        prop_assert_eq!(&a - &a, RootTwo::zero());
    }

    #[test]
    fn prop_racine2_inverse(a in non_nul::<RootTwo>()) {
        let inv = RootTwo::reciprocal(&a).unwrap();
        prop_assert_eq!(RootTwo::times(&a, &inv), RootTwo::one());
    }

    #[test]
    fn prop_racine2_plongement(a in element::<RootTwo>(), b in element::<RootTwo>()) {
        let (fa, fb) = (RootTwo::embed(&a), RootTwo::embed(&b));
        prop_assert!(proche(RootTwo::embed(&RootTwo::times(&a, &b)), fa * fb));
    }

    /// rationnels : create_rational coïncide avec le triplet (n, 0, d)
    #[test]
    fn prop_rationnels(n in -500i64..500, d in 1i64..500) {
        let r = RootTwo::create_rational(n, d).unwrap();
        prop_assert!(r.is_rational());
        let attendu = Element::<RootTwo>::new(BigInt::from(n), BigInt::from(0), BigInt::from(d)).unwrap();
        prop_assert_eq!(r, attendu);
    }
}

#[test]
fn reciproque_de_zero() {
    assert_eq!(Golden::reciprocal(&Golden::zero()), Err(ErreurCorps::ReciproqueDeZero));
    assert_eq!(RootTwo::reciprocal(&RootTwo::zero()), Err(ErreurCorps::ReciproqueDeZero));
    assert_eq!(
        Golden::divide(&Golden::one(), &Golden::zero()),
        Err(ErreurCorps::ReciproqueDeZero)
    );
}

// =============================================================================
// Relecture des formats
// =============================================================================

fn format_nombre() -> impl Strategy<Value = FormatNombre> {
    prop::sample::select(FormatNombre::TOUS.to_vec())
}

proptest! {
    #[test]
    fn prop_relecture_dore(a in element::<Golden>(), f in format_nombre()) {
        let texte = format_element(&a, f);
        prop_assert_eq!(parse_number::<Golden>(&texte, f), Ok(a));
    }

    #[test]
    fn prop_relecture_racine2(a in element::<RootTwo>(), f in format_nombre()) {
        let texte = format_element(&a, f);
        prop_assert_eq!(parse_number::<RootTwo>(&texte, f), Ok(a));
    }

    #[test]
    fn prop_relecture_vecteur(v in prop::collection::vec(element::<Golden>(), 0..5), f in format_nombre()) {
        let texte = format_vecteur(&v, f);
        prop_assert_eq!(parse_vecteur::<Golden>(&texte, f), Ok(v));
    }
}
