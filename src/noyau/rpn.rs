// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte dans un corps F
//
// Règles:
// - Ident(name):
//    - si name == "inv" => fonction unaire (postfixée en RPN)
//    - sinon => générateur du corps (résolu par F::ALIAS à l'évaluation)
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, on émet Neg :
//      "-x^2" => "x 2 ^ neg", "2^-1" => "2 1 neg ^"
// - Multiplication implicite:
//    - une valeur qui suit une valeur insère '*' : "3φ" => "3 phi *"
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs “collés” à leur argument
//   et sont sorties après la parenthèse fermante.

use num_traits::ToPrimitive;

use super::champ::{Element, QuadraticField};
use super::erreur::ErreurNoyau;
use super::jetons::Tok;

/// Borne de |n| pour a^n.
pub const EXPOSANT_MAX: i64 = 4096;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Caret | Tok::Neg => 3,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret | Tok::Neg)
}

/// Identificateurs reconnus comme fonctions (unaire).
fn is_fonction_ident(name: &str) -> bool {
    matches!(name, "inv")
}

fn est_fonction(t: &Tok) -> bool {
    matches!(t, Tok::Ident(name) if is_fonction_ident(name))
}

/// Opérateur binaire : dépile ce qui doit sortir avant lui, puis l'empile.
fn pousse_binaire(tok: Tok, out: &mut Vec<Tok>, ops: &mut Vec<Tok>) {
    let p_tok = precedence(&tok);

    // on ne traverse ni '(' ni une fonction (fonction reste collée à son argument)
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) || est_fonction(top) {
            break;
        }

        let p_top = precedence(top);
        let doit_pop = if is_right_associative(&tok) {
            p_top > p_tok
        } else {
            p_top >= p_tok
        };

        match (doit_pop, ops.pop()) {
            (true, Some(t)) => out.push(t),
            (false, Some(t)) => {
                ops.push(t);
                break;
            }
            (_, None) => break,
        }
    }

    ops.push(tok);
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("inv"), LPar, Num(1), Plus, Ident("phi"), RPar]
///   rpn:    [Num(1), Ident("phi"), Plus, Ident("inv")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et la multiplication implicite.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    pousse_binaire(Tok::Star, &mut out, &mut ops);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if prev_was_value {
                    pousse_binaire(Tok::Star, &mut out, &mut ops);
                }
                if is_fonction_ident(&name) {
                    // fonction : on la garde sur la pile (elle sortira après son argument)
                    ops.push(Tok::Ident(name));
                    prev_was_value = false;
                } else {
                    out.push(Tok::Ident(name));
                    prev_was_value = true;
                }
            }

            Tok::LPar => {
                if prev_was_value {
                    pousse_binaire(Tok::Star, &mut out, &mut ops);
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurNoyau::ParentheseInattendue);
                }

                // si une fonction est au sommet, on la sort aussi
                if ops.last().is_some_and(est_fonction) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                // préfixe : ne dépile rien
                ops.push(Tok::Neg);
            }

            Tok::Plus if !prev_was_value => {
                // plus unaire : sans effet
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                pousse_binaire(tok, &mut out, &mut ops);
                prev_was_value = false;
            }

            Tok::Neg => {
                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurNoyau::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

fn depile<F>(st: &mut Vec<Element<F>>) -> Result<Element<F>, ErreurNoyau> {
    st.pop().ok_or(ErreurNoyau::ExpressionInvalide)
}

/// (a, b) pour un opérateur binaire a ∘ b.
fn depile_deux<F>(st: &mut Vec<Element<F>>) -> Result<(Element<F>, Element<F>), ErreurNoyau> {
    let b = depile(st)?;
    let a = depile(st)?;
    Ok((a, b))
}

/// Exposant entier relatif, borné par EXPOSANT_MAX.
fn exposant<F>(b: &Element<F>) -> Result<i64, ErreurNoyau> {
    if !b.is_integer() {
        return Err(ErreurNoyau::ExposantNonEntier);
    }
    b.a0()
        .to_i64()
        .filter(|n| n.unsigned_abs() <= EXPOSANT_MAX.unsigned_abs())
        .ok_or(ErreurNoyau::ExposantTropGrand { max: EXPOSANT_MAX })
}

/// Générateur du corps F si `name` est l'un de ses alias.
fn generateur<F: QuadraticField>(name: &str) -> Result<Element<F>, ErreurNoyau> {
    if F::ALIAS.contains(&name) {
        Ok(F::generator())
    } else {
        Err(ErreurNoyau::SymboleInconnu {
            nom: name.to_string(),
            corps: F::NAME,
        })
    }
}

/// Évalue une RPN sur une pile d'éléments de F.
///
/// - Num(n/d)   => F::create_rational(n, d)
/// - Ident(g)   => F::generator() si g ∈ F::ALIAS
/// - inv        => F::reciprocal
/// - a ^ n      => F::power, n entier
pub fn from_rpn<F: QuadraticField>(rpn: &[Tok]) -> Result<Element<F>, ErreurNoyau> {
    let mut st: Vec<Element<F>> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(r) => st.push(F::create_rational(r.numer().clone(), r.denom().clone())?),

            Tok::Ident(name) if is_fonction_ident(name) => {
                let x = depile(&mut st)?;
                st.push(F::reciprocal(&x)?);
            }
            Tok::Ident(name) => st.push(generateur::<F>(name)?),

            Tok::Neg => {
                let x = depile(&mut st)?;
                st.push(F::negate(&x));
            }

            Tok::Plus => {
                let (a, b) = depile_deux(&mut st)?;
                st.push(F::plus(&a, &b));
            }
            Tok::Minus => {
                let (a, b) = depile_deux(&mut st)?;
                st.push(F::minus(&a, &b));
            }
            Tok::Star => {
                let (a, b) = depile_deux(&mut st)?;
                st.push(F::times(&a, &b));
            }
            Tok::Slash => {
                let (a, b) = depile_deux(&mut st)?;
                st.push(F::divide(&a, &b)?);
            }
            Tok::Caret => {
                let (a, b) = depile_deux(&mut st)?;
                st.push(F::power(&a, exposant(&b)?)?);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurNoyau::ParentheseInattendue),
        }
    }

    if st.len() != 1 {
        return Err(ErreurNoyau::ExpressionInvalide);
    }
    depile(&mut st)
}
