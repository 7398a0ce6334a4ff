// src/noyau/champ.rs
//
// Corps quadratiques : élément canonique + opérations génériques.
//
// Un corps ne fournit que trois règles qui dépendent du polynôme minimal de
// son générateur (times, reciprocal, embed). Tout le reste (plus, minus,
// negate, scalarmul, vectoradd, createRational, …) est partagé ici, par
// méthodes fournies du trait, et passe par la même canonicalisation.
//
// Vecteurs : Vec<Element<F>> de petite dimension. Les composantes
// “manquantes” ne sont jamais devinées par opération : on complète
// explicitement avec `complete` à la frontière (vectoradd, quaternions).

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, Sign};
use num_traits::{One, ToPrimitive, Zero};
use rand::Rng;

use super::canon::{reduit3, simplify3, simplify3_f64};
use super::erreur::ErreurCorps;

/// Borne des composantes de `random_vector` : tirage dans [-12, 12).
pub const BORNE_ALEATOIRE: i64 = 12;

/// Élément (a0 + a1·u) / d d'un corps quadratique, toujours canonique :
/// d > 0 et pgcd(|a0|, |a1|, d) = 1.
///
/// Égalité et hachage portent sur le triplet canonique : deux éléments égaux
/// comme réels sont égaux comme clefs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Element<F> {
    a0: BigInt,
    a1: BigInt,
    d: BigInt,
    corps: PhantomData<F>,
}

/// Vecteur de composantes dans le corps F.
pub type Vecteur<F> = Vec<Element<F>>;

impl<F> Element<F> {
    /// Triplet déjà canonique (usage interne).
    fn brut(a0: BigInt, a1: BigInt, d: BigInt) -> Self {
        Self {
            a0,
            a1,
            d,
            corps: PhantomData,
        }
    }

    /// Canonicalise (v0, v1, v2) avec v2 non nul (usage interne).
    pub(crate) fn reduit(v0: BigInt, v1: BigInt, v2: BigInt) -> Self {
        let (a0, a1, d) = reduit3(v0, v1, v2);
        Self::brut(a0, a1, d)
    }

    /// Construit (a0 + a1·u) / d sous forme canonique.
    ///
    /// # Errors
    /// `ErreurCorps::DenominateurNul` si `d == 0`.
    pub fn new(
        a0: impl Into<BigInt>,
        a1: impl Into<BigInt>,
        d: impl Into<BigInt>,
    ) -> Result<Self, ErreurCorps> {
        let (a0, a1, d) = simplify3(a0.into(), a1.into(), d.into())?;
        Ok(Self::brut(a0, a1, d))
    }

    /// Construction depuis des flottants (import, saisie) : composantes entières exigées.
    ///
    /// # Errors
    /// `ErreurCorps::NonEntier` ou `ErreurCorps::DenominateurNul`.
    pub fn from_f64_parts(v0: f64, v1: f64, v2: f64) -> Result<Self, ErreurCorps> {
        let (a0, a1, d) = simplify3_f64(v0, v1, v2)?;
        Ok(Self::brut(a0, a1, d))
    }

    /// Entier n (dénominateur 1).
    pub fn entier(n: impl Into<BigInt>) -> Self {
        Self::brut(n.into(), BigInt::zero(), BigInt::one())
    }

    pub fn a0(&self) -> &BigInt {
        &self.a0
    }

    pub fn a1(&self) -> &BigInt {
        &self.a1
    }

    pub fn d(&self) -> &BigInt {
        &self.d
    }

    pub fn triple(&self) -> (BigInt, BigInt, BigInt) {
        (self.a0.clone(), self.a1.clone(), self.d.clone())
    }

    /// Triplet en i64 si chaque composante y tient.
    pub fn to_i64_triple(&self) -> Option<(i64, i64, i64)> {
        Some((self.a0.to_i64()?, self.a1.to_i64()?, self.d.to_i64()?))
    }

    pub fn is_zero(&self) -> bool {
        self.a0.is_zero() && self.a1.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.a0.is_one() && self.a1.is_zero() && self.d.is_one()
    }

    /// Rationnel pur (pas de partie irrationnelle).
    pub fn is_rational(&self) -> bool {
        self.a1.is_zero()
    }

    /// Vrai si l'élément est un entier relatif.
    pub fn is_integer(&self) -> bool {
        self.a1.is_zero() && self.d.is_one()
    }
}

impl<F: QuadraticField> fmt::Debug for Element<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {}, {})", F::NAME, self.a0, self.a1, self.d)
    }
}

/// Règles propres à un corps quadratique Q(u).
///
/// Ajouter un corps = implémenter `times`, `reciprocal` et `embed`
/// (plus son nom et son symbole) ; la canonicalisation et les opérations
/// génériques sont héritées.
pub trait QuadraticField:
    Copy + Clone + Default + fmt::Debug + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Nom du corps (ex: "golden").
    const NAME: &'static str;

    /// Degré de l'extension (toujours 2 ici).
    const ORDER: usize = 2;

    /// Symbole du générateur pour l'affichage (ex: "φ").
    const SYMBOLE: &'static str;

    /// Symbole ASCII du générateur (format expression).
    const SYMBOLE_ASCII: &'static str;

    /// Noms acceptés en saisie pour le générateur (minuscules).
    const ALIAS: &'static [&'static str];

    /// Produit, réduit via le polynôme minimal du générateur.
    fn times(a: &Element<Self>, b: &Element<Self>) -> Element<Self>;

    /// Inverse, rationalisé par le conjugué.
    ///
    /// # Errors
    /// `ErreurCorps::ReciproqueDeZero` si `a` est nul.
    fn reciprocal(a: &Element<Self>) -> Result<Element<Self>, ErreurCorps>;

    /// Plongement flottant (affichage / mesure, jamais pour l'identité).
    fn embed(a: &Element<Self>) -> f64;

    /* ------------------------ constantes ------------------------ */

    fn zero() -> Element<Self> {
        Element::brut(BigInt::zero(), BigInt::zero(), BigInt::one())
    }

    fn one() -> Element<Self> {
        Element::brut(BigInt::one(), BigInt::zero(), BigInt::one())
    }

    /// Le générateur u nu : (0, 1, 1).
    fn generator() -> Element<Self> {
        Element::brut(BigInt::zero(), BigInt::one(), BigInt::one())
    }

    /* ------------------------ opérations génériques ------------------------ */

    fn plus(a: &Element<Self>, b: &Element<Self>) -> Element<Self> {
        Element::reduit(
            &a.a0 * &b.d + &b.a0 * &a.d,
            &a.a1 * &b.d + &b.a1 * &a.d,
            &a.d * &b.d,
        )
    }

    fn minus(a: &Element<Self>, b: &Element<Self>) -> Element<Self> {
        Element::reduit(
            &a.a0 * &b.d - &b.a0 * &a.d,
            &a.a1 * &b.d - &b.a1 * &a.d,
            &a.d * &b.d,
        )
    }

    /// Seuls les signes changent : déjà canonique.
    fn negate(a: &Element<Self>) -> Element<Self> {
        Element::brut(-&a.a0, -&a.a1, a.d.clone())
    }

    /// a / b = a · (1/b)
    ///
    /// # Errors
    /// `ErreurCorps::ReciproqueDeZero` si `b` est nul.
    fn divide(a: &Element<Self>, b: &Element<Self>) -> Result<Element<Self>, ErreurCorps> {
        Ok(Self::times(a, &Self::reciprocal(b)?))
    }

    /// a^n, n entier relatif (n < 0 passe par la réciproque).
    ///
    /// # Errors
    /// `ErreurCorps::ReciproqueDeZero` pour 0^n avec n < 0.
    fn power(a: &Element<Self>, n: i64) -> Result<Element<Self>, ErreurCorps> {
        let base = if n < 0 {
            Self::reciprocal(a)?
        } else {
            a.clone()
        };

        let mut e = n.unsigned_abs();
        let mut acc = Self::one();
        let mut b = base;

        while e > 0 {
            if (e & 1) == 1 {
                acc = Self::times(&acc, &b);
            }
            e >>= 1;
            if e > 0 {
                b = Self::times(&b, &b);
            }
        }
        Ok(acc)
    }

    /// n / d dans le corps.
    ///
    /// # Errors
    /// `ErreurCorps::DenominateurNul` si `d == 0`.
    fn create_rational(n: impl Into<BigInt>, d: impl Into<BigInt>) -> Result<Element<Self>, ErreurCorps> {
        Element::new(n.into(), BigInt::zero(), d)
    }

    /// [a0, d0, a1, d1] -> a0/d0 + (a1/d1)·u ; entrées manquantes : a0=0, d0=1, a1=0, d1=1.
    ///
    /// # Errors
    /// `ErreurCorps::DenominateurNul` si d0 ou d1 est nul.
    fn create_rational_from_pairs(paires: &[i64]) -> Result<Element<Self>, ErreurCorps> {
        let lire = |i: usize, defaut: i64| BigInt::from(paires.get(i).copied().unwrap_or(defaut));
        let (a0, d0, a1, d1) = (lire(0, 0), lire(1, 1), lire(2, 0), lire(3, 1));
        if d0.is_zero() || d1.is_zero() {
            return Err(ErreurCorps::DenominateurNul);
        }
        Element::new(&a0 * &d1, &a1 * &d0, d0 * d1)
    }

    /// Signe du réel a (-1, 0, +1).
    ///
    /// Exact quand a0 et a1 ne sont pas de signes opposés ; sinon lu sur le
    /// plongement. Un corps qui connaît son discriminant la remplace par
    /// `signe_p_plus_q_racine` (voir Golden, RootTwo).
    fn sign(a: &Element<Self>) -> i32 {
        let (s0, s1) = (signe_entier(&a.a0), signe_entier(&a.a1));
        if s0 == 0 {
            return s1;
        }
        if s1 == 0 || s0 == s1 {
            return s0;
        }
        let f = Self::embed(a);
        if f > 0.0 {
            1
        } else if f < 0.0 {
            -1
        } else {
            s1
        }
    }

    /* ------------------------ vecteurs ------------------------ */

    /// Une ligne par composante, en paires [a0, d0, a1, d1] (fin omise : 0, 1, 0, 1).
    ///
    /// # Errors
    /// `ErreurCorps::DenominateurNul` si une ligne a un dénominateur nul.
    fn create_vector<R: AsRef<[i64]>>(lignes: &[R]) -> Result<Vecteur<Self>, ErreurCorps> {
        lignes
            .iter()
            .map(|l| Self::create_rational_from_pairs(l.as_ref()))
            .collect()
    }

    /// Composantes entières [a0, a1] (fin omise : 0).
    fn create_integer_vector<R: AsRef<[i64]>>(lignes: &[R]) -> Vecteur<Self> {
        lignes
            .iter()
            .map(|l| {
                let l = l.as_ref();
                let lire = |i: usize| BigInt::from(l.get(i).copied().unwrap_or(0));
                Element::brut(lire(0), lire(1), BigInt::one())
            })
            .collect()
    }

    /// Diviseur final : [a0, a1, d] par composante (a1 omis : 0, d omis : 1).
    ///
    /// # Errors
    /// `ErreurCorps::DenominateurNul` si un diviseur vaut 0.
    fn create_vector_from_tds<R: AsRef<[i64]>>(lignes: &[R]) -> Result<Vecteur<Self>, ErreurCorps> {
        lignes
            .iter()
            .map(|l| {
                let l = l.as_ref();
                let lire = |i: usize, defaut: i64| l.get(i).copied().unwrap_or(defaut);
                Element::new(lire(0, 0), lire(1, 0), lire(2, 1))
            })
            .collect()
    }

    fn scalarmul(s: &Element<Self>, v: &[Element<Self>]) -> Vecteur<Self> {
        v.iter().map(|vi| Self::times(s, vi)).collect()
    }

    /// Somme composante par composante ; l'opérande le plus court est complété par zéro.
    fn vectoradd(u: &[Element<Self>], v: &[Element<Self>]) -> Vecteur<Self> {
        let n = u.len().max(v.len());
        let u = complete(u, n);
        let v = complete(v, n);
        u.iter().zip(v.iter()).map(|(a, b)| Self::plus(a, b)).collect()
    }

    fn embedv(v: &[Element<Self>]) -> Vec<f64> {
        v.iter().map(Self::embed).collect()
    }

    /// Vecteur nul de dimension `dims`.
    fn origin(dims: usize) -> Vecteur<Self> {
        vec![Self::zero(); dims]
    }

    /// Vecteur de base : zéro partout sauf `one` sur `axe`.
    ///
    /// # Errors
    /// `ErreurCorps::AxeHorsBornes` si `axe >= dims`.
    fn basis_vector(dims: usize, axe: usize) -> Result<Vecteur<Self>, ErreurCorps> {
        if axe >= dims {
            return Err(ErreurCorps::AxeHorsBornes { axe, dims });
        }
        let mut v = Self::origin(dims);
        v[axe] = Self::one();
        Ok(v)
    }

    /// 3 entiers tirés dans [-BORNE_ALEATOIRE, BORNE_ALEATOIRE), dénominateur 1.
    fn random_vector() -> Vecteur<Self> {
        Self::random_vector_with(&mut rand::thread_rng())
    }

    /// Idem, avec une source aléatoire fournie (tests reproductibles).
    fn random_vector_with<R: Rng>(rng: &mut R) -> Vecteur<Self> {
        (0..3)
            .map(|_| Element::entier(rng.gen_range(-BORNE_ALEATOIRE..BORNE_ALEATOIRE)))
            .collect()
    }
}

/// (a0 + u·a1) / d en flottant, u étant le générateur plongé.
///
/// Les trois entiers sont d'abord ramenés sous 2^1000 par un même décalage
/// binaire : un quotient représentable reste lisible même quand a0, a1 et d
/// dépassent f64::MAX. Résultat infini si le quotient lui-même déborde.
/// Lecture approchée : la soustraction flottante peut annuler tous les
/// chiffres (voir `sign` pour le signe exact).
pub fn plonge<F>(a: &Element<F>, u: f64) -> f64 {
    const BITS_MAX: u64 = 1000;
    let bits = a.a0.bits().max(a.a1.bits()).max(a.d.bits());
    let decalage = bits.saturating_sub(BITS_MAX);
    let vers_f64 = |n: &BigInt| (n >> decalage).to_f64().unwrap_or(f64::NAN);
    (vers_f64(&a.a0) + u * vers_f64(&a.a1)) / vers_f64(&a.d)
}

/// Signe d'un entier : -1, 0 ou +1.
pub fn signe_entier(n: &BigInt) -> i32 {
    match n.sign() {
        Sign::Plus => 1,
        Sign::Minus => -1,
        Sign::NoSign => 0,
    }
}

/// Signe exact de p + q·√n, pour n > 0 qui n'est pas un carré parfait.
///
/// Termes de signes opposés : on compare p² et n·q² (jamais égaux, √n
/// étant irrationnel).
pub fn signe_p_plus_q_racine(p: &BigInt, q: &BigInt, n: u32) -> i32 {
    let (sp, sq) = (signe_entier(p), signe_entier(q));
    if sp == 0 {
        return sq;
    }
    if sq == 0 || sp == sq {
        return sp;
    }
    if p * p > BigInt::from(n) * q * q {
        sp
    } else {
        sq
    }
}

/// Complète `v` par des zéros jusqu'à `dims` composantes (tronque si plus long).
pub fn complete<F: QuadraticField>(v: &[Element<F>], dims: usize) -> Vecteur<F> {
    let mut out: Vecteur<F> = v.iter().take(dims).cloned().collect();
    out.resize(dims, F::zero());
    out
}

/* ------------------------ opérateurs ------------------------ */

impl<F: QuadraticField> Add for &Element<F> {
    type Output = Element<F>;
    fn add(self, rhs: Self) -> Element<F> {
        F::plus(self, rhs)
    }
}

impl<F: QuadraticField> Add for Element<F> {
    type Output = Element<F>;
    fn add(self, rhs: Self) -> Element<F> {
        F::plus(&self, &rhs)
    }
}

impl<F: QuadraticField> Sub for &Element<F> {
    type Output = Element<F>;
    fn sub(self, rhs: Self) -> Element<F> {
        F::minus(self, rhs)
    }
}

impl<F: QuadraticField> Sub for Element<F> {
    type Output = Element<F>;
    fn sub(self, rhs: Self) -> Element<F> {
        F::minus(&self, &rhs)
    }
}

impl<F: QuadraticField> Mul for &Element<F> {
    type Output = Element<F>;
    fn mul(self, rhs: Self) -> Element<F> {
        F::times(self, rhs)
    }
}

impl<F: QuadraticField> Mul for Element<F> {
    type Output = Element<F>;
    fn mul(self, rhs: Self) -> Element<F> {
        F::times(&self, &rhs)
    }
}

impl<F: QuadraticField> Neg for &Element<F> {
    type Output = Element<F>;
    fn neg(self) -> Element<F> {
        F::negate(self)
    }
}

impl<F: QuadraticField> Neg for Element<F> {
    type Output = Element<F>;
    fn neg(self) -> Element<F> {
        F::negate(&self)
    }
}
