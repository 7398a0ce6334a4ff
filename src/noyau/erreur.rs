// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - ErreurCorps : violation de contrat (argument invalide) côté arithmétique exacte.
// - ErreurNoyau : pipeline d'évaluation (jetons -> RPN -> valeur).
//
// Aucune erreur n'est “récupérée” en interne : on la remonte telle quelle à l'appelant.

use thiserror::Error;

/// Argument invalide passé à une opération de corps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCorps {
    /// Une composante n'est pas un entier (ou n'est pas finie).
    #[error("argument invalide : composante non entière ({0})")]
    NonEntier(String),

    #[error("argument invalide : dénominateur nul")]
    DenominateurNul,

    #[error("argument invalide : réciproque de zéro (division par zéro)")]
    ReciproqueDeZero,

    #[error("argument invalide : axe {axe} hors de la dimension {dims}")]
    AxeHorsBornes { axe: usize, dims: usize },

    #[error("argument invalide : ensemble de points vide")]
    EnsembleVide,
}

/// Échec du pipeline d'évaluation d'une expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    #[error("Entrée vide")]
    EntreeVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("parenthèse inattendue")]
    ParentheseInattendue,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("exposant doit être entier")]
    ExposantNonEntier,

    #[error("exposant trop grand (|n| > {max})")]
    ExposantTropGrand { max: i64 },

    #[error("symbole inconnu pour le corps {corps}: {nom}")]
    SymboleInconnu { nom: String, corps: &'static str },

    #[error(transparent)]
    Corps(#[from] ErreurCorps),
}
