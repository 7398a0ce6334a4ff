//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : trouver les limites sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur de série, longueur de somme)
//! - digits limités pour ΣLocal
//!
//! Notes :
//! - L'égalité est toujours celle des triplets canoniques : aucun test ne
//!   compare des flottants pour décider si deux valeurs sont égales.
//! - Le groupe icosaédrique est calculé une fois (OnceLock) : le premier test
//!   qui y touche paie la construction, d'où un budget plus large.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use super::champ::{Element, QuadraticField};
use super::dore::{Golden, PHI};
use super::eval_expression;
use super::quaternion::Quaternion;
use super::racine2::RootTwo;
use super::serie::golden_series;

fn eval_ok<F: QuadraticField>(expr: &str, digits: usize) -> (String, String) {
    let ev = eval_expression::<F>(expr, digits).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    (ev.exact, ev.lecture)
}

fn assert_exact_eq<F: QuadraticField>(expr: &str, attendu: &str) {
    let (exact, _lecture) = eval_ok::<F>(expr, 10);
    assert_eq!(exact.trim(), attendu.trim(), "expr={expr:?}");
}

fn g(a0: i64, a1: i64, d: i64) -> Element<Golden> {
    Element::new(a0, a1, d).unwrap()
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Valeurs de référence ------------------------ */

#[test]
fn sci_valeurs_de_reference_dore() {
    // φ² = φ + 1 ; (1 + φ)/2 · (1 - φ)/2 = -φ/4 ; 1/φ² = 2 - φ
    assert_eq!(Golden::times(&g(0, 1, 1), &g(0, 1, 1)), g(1, 1, 1));
    assert_eq!(Golden::times(&g(1, 1, 2), &g(1, -1, 2)), g(0, -1, 4));
    assert_eq!(Golden::reciprocal(&g(1, 1, 1)).unwrap(), g(2, -1, 1));
    assert_eq!(Golden::reciprocal(&g(3, 0, 4)).unwrap(), g(4, 0, 3));
}

#[test]
fn sci_valeurs_de_reference_racine_deux() {
    let r = |a0: i64, a1: i64, d: i64| Element::<RootTwo>::new(a0, a1, d).unwrap();
    assert_eq!(RootTwo::times(&r(0, 1, 1), &r(0, 1, 1)), r(2, 0, 1));
    assert_eq!(RootTwo::times(&r(1, 1, 1), &r(1, -1, 1)), r(-1, 0, 1));
    assert_eq!(RootTwo::reciprocal(&r(1, 1, 1)).unwrap(), r(-1, 1, 1));
    assert_eq!(RootTwo::reciprocal(&r(0, 1, 1)).unwrap(), r(0, 1, 2));
}

#[test]
fn sci_fibonacci_par_puissances() {
    // φ^n = F(n-1) + F(n)·φ
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let (mut f0, mut f1) = (0i64, 1i64);
    for n in 1..60 {
        budget(t0, max);
        let p = Golden::power(&Golden::generator(), n).unwrap();
        assert_eq!(p, g(f0, f1, 1), "n={n}");
        (f0, f1) = (f1, f0 + f1);
    }
}

/* ------------------------ Cohérence algébrique (zéro) ------------------------ */

#[test]
fn sci_zero_algebrique() {
    assert_exact_eq::<Golden>("(1/2 + 1/3) - 5/6", "0");
    assert_exact_eq::<Golden>("phi^2 - phi - 1", "0");
    assert_exact_eq::<Golden>("phi * inv(phi) - 1", "0");
    assert_exact_eq::<Golden>("(2phi - 1)^2 - 5", "0");
    assert_exact_eq::<RootTwo>("sqrt2*sqrt2 - 2", "0");
    assert_exact_eq::<RootTwo>("(1 + √2)(√2 - 1) - 1", "0");
}

#[test]
fn sci_plongement_coherent() {
    // l'erreur relative du plongement reste petite sur des expressions moyennes
    for (expr, attendu) in [
        ("phi^10", PHI.powi(10)),
        ("(3 - phi)/(2 + 5phi)", (3.0 - PHI) / (2.0 + 5.0 * PHI)),
        ("inv(phi^3)", PHI.powi(-3)),
    ] {
        let ev = eval_expression::<Golden>(expr, 10).unwrap();
        let f = Golden::embed(&ev.valeur);
        assert!(((f - attendu) / attendu).abs() < 1e-12, "expr={expr:?} f={f}");
    }
}

/* ------------------------ Groupe icosaédrique ------------------------ */

#[test]
fn sci_groupe_ferme() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let qs = Golden::quaternions();
    let set: HashSet<&Quaternion> = qs.iter().collect();
    budget(t0, max);

    // produit de deux rotations = une rotation de l'ensemble (au signe près)
    for a in qs.iter().step_by(7) {
        for b in qs.iter().step_by(5) {
            let c = a.mul(b).normalise();
            assert!(set.contains(&c), "produit hors groupe: {c:?}");
        }
        budget(t0, max);
    }
}

#[test]
fn sci_orbite_d_un_axe() {
    // orbite de l'axe x : 30 directions distinctes au signe près (axes des arêtes)
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let x = [Golden::one(), Golden::zero(), Golden::zero()];
    let mut orbite: HashSet<Vec<Element<Golden>>> = HashSet::new();
    for q in Golden::quaternions() {
        orbite.insert(Golden::quat_transform(q, &x));
        budget(t0, max);
    }
    assert_eq!(orbite.len(), 60 / 2);
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_taille_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut expr = String::new();
    for k in 0..80 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("1/2 + phi/2");
        budget(t0, max);
    }

    // 80*(1 + φ)/2 = 40 + 40φ
    assert_exact_eq::<Golden>(&expr, "40 +40φ");
}

#[test]
fn sci_stress_bigint_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // gros numérateur contrôlé (100 chiffres)
    let big = "9".repeat(100);
    let expr = format!("{big}/7 + 1/7 + phi");
    budget(t0, max);

    let (exact, _lec) = eval_ok::<Golden>(&expr, 5);
    assert!(exact.ends_with("φ)/7"), "exact={exact}");
    assert!(exact.starts_with("(1"), "exact={exact}");
}

#[test]
fn sci_stress_serie_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // profondeur 20 : 17711 termes
    let s = golden_series(20);
    budget(t0, max);
    assert_eq!(s.len(), 17_711);
    assert_eq!(s.last().cloned(), Some(g(10_946, 6_765, 1)));
}

/* ------------------------ ΣLocal : cohérence minimale ------------------------ */

#[test]
fn sci_socal_coherence_basic() {
    let (_exact, lec) = eval_ok::<Golden>("phi", 12);
    assert_eq!(lec, "1.618033988750");

    let (_exact, lec) = eval_ok::<RootTwo>("-sqrt2", 4);
    assert_eq!(lec, "-1.4142");

    let (_exact, lec) = eval_ok::<Golden>("7", 0);
    assert_eq!(lec, "7");
}
