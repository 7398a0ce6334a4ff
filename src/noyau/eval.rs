//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile d'éléments du corps F -> élément canonique
//!        -> EXACT (format choisi) + triplet + ΣLocal (plongement flottant)
//!
//! Le corps est un paramètre de type : la même saisie "phi^2" vaut 1 +φ dans
//! le corps doré et une erreur (symbole inconnu) dans Q(√2).

use super::champ::{Element, QuadraticField};
use super::erreur::ErreurNoyau;
use super::format::{format_element, format_triplet, FormatNombre};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{from_rpn, to_rpn};

/// Décimales max de ΣLocal : au-delà, le plongement f64 n'a plus de sens.
pub const DIGITS_MAX_LECTURE: usize = 15;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub triplet: String,
    pub note: String,
}

/// Résultat complet d'une évaluation.
#[derive(Clone, Debug)]
pub struct Evaluation<F: QuadraticField> {
    pub valeur: Element<F>,
    pub exact: String,
    pub lecture: String,
    pub demarche: DemarcheNoyau,
}

/// API publique : évalue une expression dans le corps F et retourne:
/// - la valeur canonique
/// - EXACT (forme finie, format `format`)
/// - ΣLocal (lecture décimale du plongement, `digits` décimales)
/// - Démarche (jetons, rpn, triplet)
pub fn eval_expression_format<F: QuadraticField>(
    expr_str: &str,
    digits: usize,
    format: FormatNombre,
) -> Result<Evaluation<F>, ErreurNoyau> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_tokens(&jetons);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);

    // 3) Pile dans F
    let valeur = from_rpn::<F>(&rpn)?;

    // 4) EXACT + ΣLocal
    let exact = format_element(&valeur, format);
    let digits = digits.min(DIGITS_MAX_LECTURE);
    let lecture = format!("{:.*}", digits, F::embed(&valeur));

    tracing::debug!(corps = F::NAME, entree = s, %exact, "expression évaluée");

    let demarche = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
        triplet: format_triplet(&valeur),
        note: format!(
            "Pipeline: jetons → RPN → pile dans {} → canon (a0 + a1·{})/d → EXACT → ΣLocal.",
            F::NAME,
            F::SYMBOLE
        ),
    };

    Ok(Evaluation {
        valeur,
        exact,
        lecture,
        demarche,
    })
}

/// Idem, EXACT au format par défaut.
pub fn eval_expression<F: QuadraticField>(
    expr_str: &str,
    digits: usize,
) -> Result<Evaluation<F>, ErreurNoyau> {
    eval_expression_format::<F>(expr_str, digits, FormatNombre::Defaut)
}
