// src/noyau/geometrie.rs
//
// Petites commandes géométriques côté client :
// - centroïde exact d'un ensemble de points (1/n · Σ p)
// - projection 4D -> 3D (retire W, en tête ou en queue)
//
// L'identité d'un point est son vecteur canonique : deux centroïdes égaux
// ont le même hachage, ce qui suffit au dédoublonnage des instances.

use super::champ::{complete, Element, QuadraticField, Vecteur};
use super::erreur::ErreurCorps;

/// Centroïde exact.
///
/// # Errors
/// `ErreurCorps::EnsembleVide` si `points` est vide.
pub fn centroide<F: QuadraticField>(points: &[Vecteur<F>]) -> Result<Vecteur<F>, ErreurCorps> {
    let (premier, reste) = points.split_first().ok_or(ErreurCorps::EnsembleVide)?;

    let somme = reste
        .iter()
        .fold(premier.clone(), |acc, p| F::vectoradd(&acc, p));

    let echelle = F::create_rational(1, points.len() as u64)?;
    Ok(F::scalarmul(&echelle, &somme))
}

/// Retire la composante W : la première si `w_first`, sinon la dernière.
pub fn projete_3d<F: QuadraticField>(v: &[Element<F>], w_first: bool) -> Vecteur<F> {
    let v = complete(v, 4);
    if w_first {
        v[1..].to_vec()
    } else {
        v[..3].to_vec()
    }
}
