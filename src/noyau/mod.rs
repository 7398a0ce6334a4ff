//! Noyau exact : corps quadratiques Q(u)
//!
//! Organisation interne :
//! - canon.rs      : canonicalisation des triplets (a0, a1, d)
//! - champ.rs      : Element<F> + trait QuadraticField (opérations partagées)
//! - dore.rs       : corps doré Q(φ)
//! - racine2.rs    : corps Q(√2)
//! - quaternion.rs : quaternions dorés + 60 rotations icosaédriques
//! - serie.rs      : série dorée (mot de Fibonacci)
//! - geometrie.rs  : centroïde, projection 4D -> 3D
//! - format.rs     : affichage EXACT (défaut, expression, zomic, vef)
//! - relecture.rs  : lecture inverse des quatre formats (nombres, vecteurs)
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + évaluation sur pile
//! - eval.rs       : pipeline complet
//! - erreur.rs     : erreurs (thiserror)

pub mod canon;
pub mod champ;
pub mod dore;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod geometrie;
pub mod jetons;
pub mod quaternion;
pub mod racine2;
pub mod relecture;
pub mod rpn;
pub mod serie;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use champ::{complete, Element, QuadraticField, Vecteur};
pub use dore::Golden;
pub use erreur::{ErreurCorps, ErreurNoyau};
pub use eval::{eval_expression, eval_expression_format, DemarcheNoyau, Evaluation};
pub use format::FormatNombre;
pub use geometrie::{centroide, projete_3d};
pub use quaternion::Quaternion;
pub use racine2::RootTwo;
pub use relecture::{parse_number, parse_vecteur};
