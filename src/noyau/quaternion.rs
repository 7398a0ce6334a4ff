// src/noyau/quaternion.rs
//
// Quaternions sur le corps doré, convention W en premier : [w, x, y, z].
// (three.js attend W en dernier : conversion à faire côté rendu.)
//
// - produit de Hamilton exact (times/plus/minus du corps doré)
// - conjugué, transformation d'un 3-vecteur
// - normalisation de signe : q et -q donnent le même représentant
// - groupe des 60 rotations icosaédriques, calculé une seule fois (OnceLock)

use std::sync::OnceLock;

use num_bigint::BigInt;

use super::champ::{complete, signe_entier, Element, QuadraticField, Vecteur};
use super::dore::Golden;

type E = Element<Golden>;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Quaternion(pub [E; 4]);

impl Quaternion {
    pub fn new(w: E, x: E, y: E, z: E) -> Self {
        Self([w, x, y, z])
    }

    /// Quaternion depuis 0..4 composantes : les manquantes valent zéro.
    pub fn from_partial(composantes: &[E]) -> Self {
        Self(std::array::from_fn(|i| {
            composantes.get(i).cloned().unwrap_or_else(Golden::zero)
        }))
    }

    /// Quaternion pur (0, v) pour un 3-vecteur.
    pub fn pur(v: &[E]) -> Self {
        let v = complete(v, 3);
        Self::new(Golden::zero(), v[0].clone(), v[1].clone(), v[2].clone())
    }

    pub fn identite() -> Self {
        Self::from_partial(&[Golden::one()])
    }

    pub fn composantes(&self) -> &[E; 4] {
        &self.0
    }

    /// Produit de Hamilton u·v.
    pub fn mul(&self, v: &Quaternion) -> Quaternion {
        let x = Golden::times;
        let a = Golden::plus;
        let s = Golden::minus;
        let [u0, u1, u2, u3] = &self.0;
        let [v0, v1, v2, v3] = &v.0;

        Quaternion([
            s(&x(u0, v0), &a(&a(&x(u1, v1), &x(u2, v2)), &x(u3, v3))),
            a(&a(&x(u0, v1), &x(u1, v0)), &s(&x(u2, v3), &x(u3, v2))),
            a(&a(&x(u0, v2), &x(u2, v0)), &s(&x(u3, v1), &x(u1, v3))),
            a(&a(&x(u0, v3), &x(u3, v0)), &s(&x(u1, v2), &x(u2, v1))),
        ])
    }

    /// Conjugué : parties imaginaires négées.
    pub fn conjugue(&self) -> Quaternion {
        let [w, x, y, z] = &self.0;
        Quaternion::new(
            w.clone(),
            Golden::negate(x),
            Golden::negate(y),
            Golden::negate(z),
        )
    }

    /// Q · (0, v) · Q̄, sans la composante scalaire.
    /// Q doit être unitaire pour que ce soit une rotation.
    pub fn transform(&self, v: &[E]) -> [E; 3] {
        let r = self.mul(&Quaternion::pur(v).mul(&self.conjugue()));
        let [_, x, y, z] = r.0;
        [x, y, z]
    }

    /// Représentant canonique au signe près.
    ///
    /// Premier signe non nul parmi les composantes (grsign), +1 si toutes
    /// sont nulles ; puis multiplication par ce signe. q et -q donnent donc
    /// le même résultat.
    pub fn normalise(&self) -> Quaternion {
        let signe = self
            .0
            .iter()
            .map(grsign)
            .find(|s| *s != 0)
            .unwrap_or(1);

        let facteur = Element::entier(signe);
        let v = Golden::scalarmul(&facteur, &self.0);
        Quaternion::from_partial(&v)
    }

    /// w² + x² + y² + z², exact.
    pub fn norme_carree(&self) -> E {
        self.0
            .iter()
            .fold(Golden::zero(), |acc, c| Golden::plus(&acc, &Golden::times(c, c)))
    }

    pub fn embed(&self) -> [f64; 4] {
        let [w, x, y, z] = &self.0;
        [
            Golden::embed(w),
            Golden::embed(x),
            Golden::embed(y),
            Golden::embed(z),
        ]
    }
}

/* ------------------------ générateurs (familles bleue / jaune / rouge) ------------------------ */

// Constantes littérales : dénominateurs non nuls.
fn q(composantes: &[(i64, i64, i64)]) -> Quaternion {
    let v: Vecteur<Golden> = composantes
        .iter()
        .map(|&(a0, a1, d)| Element::reduit(BigInt::from(a0), BigInt::from(a1), BigInt::from(d)))
        .collect();
    Quaternion::from_partial(&v)
}

/// 4 quaternions : identité et demi-tours autour des axes (sous-groupe de Klein).
pub fn famille_bleue() -> Vec<Quaternion> {
    vec![
        Quaternion::identite(),
        q(&[(0, 0, 1), (1, 0, 1)]),
        q(&[(0, 0, 1), (0, 0, 1), (0, 0, 1), (1, 0, 1)]),
        q(&[(0, 0, 1), (0, 0, 1), (1, 0, 1)]),
    ]
}

/// 3 quaternions : identité et rotations d'ordre 3 autour des diagonales.
pub fn famille_jaune() -> Vec<Quaternion> {
    let h = (1, 0, 2);
    vec![
        Quaternion::identite(),
        q(&[h, h, h, h]),
        q(&[(-1, 0, 2), h, h, h]),
    ]
}

/// 5 quaternions : puissances successives d'une rotation d'ordre 5.
pub fn famille_rouge() -> Vec<Quaternion> {
    let graine = q(&[(0, 1, 2), (1, 0, 2), (-1, 1, 2)]);
    let mut rouge = vec![Quaternion::identite(), graine.clone()];
    for i in 2..5 {
        let suivant = rouge[i - 1].mul(&graine);
        rouge.push(suivant);
    }
    rouge
}

/// Produits normalisés b · (y · r), bleu dehors, rouge au milieu, jaune dedans.
/// 4 × 5 × 3 = 60 produits, tous distincts : aucun dédoublonnage appliqué.
pub fn genere_groupe_icosaedrique() -> Vec<Quaternion> {
    let bleus = famille_bleue();
    let rouges = famille_rouge();
    let jaunes = famille_jaune();

    let mut out = Vec::with_capacity(bleus.len() * rouges.len() * jaunes.len());
    for b in &bleus {
        for r in &rouges {
            for y in &jaunes {
                out.push(b.mul(&y.mul(r)).normalise());
            }
        }
    }
    out
}

static QUATERNIONS: OnceLock<Vec<Quaternion>> = OnceLock::new();

/// Ensemble précalculé (une fois par processus, immuable ensuite).
pub fn quaternions_icosaedriques() -> &'static [Quaternion] {
    QUATERNIONS.get_or_init(|| {
        let v = genere_groupe_icosaedrique();
        tracing::debug!(taille = v.len(), "groupe icosaédrique construit");
        v
    })
}

/// Signe lu sur le plongement, départage sur a1 si celui-ci vaut 0.0.
///
/// Règle de normalisation des quaternions seulement ; pour le signe exact
/// d'un élément, voir `QuadraticField::sign`.
fn grsign(c: &E) -> i32 {
    let f = Golden::embed(c);
    if f > 0.0 {
        1
    } else if f < 0.0 {
        -1
    } else {
        signe_entier(c.a1())
    }
}
