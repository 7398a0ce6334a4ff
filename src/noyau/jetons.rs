// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::{ErreurCorps, ErreurNoyau};

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    // Générateur du corps ou fonction (inv) : résolu plus tard (rpn.rs),
    // quand on sait dans quel corps on évalue.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,

    // Moins unaire : jamais produit par tokenize, seulement par to_rpn.
    Neg,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12)
/// - fractions littérales sans espaces (ex: 12/34) -> Num(12/34)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - φ (équivaut à ident("phi"))
/// - √n (équivaut à ident("sqrtn"), ex: √2 -> "sqrt2")
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses + opérateurs
        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' | '·' | '×' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // φ / Φ
        if c == 'φ' || c == 'Φ' {
            out.push(Tok::Ident("phi".to_string()));
            i += 1;
            continue;
        }

        // √n : radical collé à son entier
        if c == '√' {
            i += 1;
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if start == i {
                return Err(ErreurNoyau::CaractereInattendu('√'));
            }
            let n: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(format!("sqrt{n}")));
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word.to_lowercase()));
            continue;
        }

        // Nombre entier ou fraction littérale a/b (sans espaces)
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let int_str: String = chars[start..i].iter().collect();
            let n = BigInt::parse_bytes(int_str.as_bytes(), 10)
                .ok_or_else(|| ErreurNoyau::NombreInvalide(int_str.clone()))?;

            // par défaut: entier
            let mut rat = BigRational::from_integer(n.clone());

            // fraction immédiate: 12/34 (pas de parenthèses, pas d’espaces)
            if i < chars.len() && chars[i] == '/' {
                let save = i;
                i += 1;
                let start_d = i;

                // si pas un chiffre après '/', c’est une division normale (on recule)
                if start_d >= chars.len() || !chars[start_d].is_ascii_digit() {
                    i = save; // on remet sur '/'
                } else {
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                    let d_str: String = chars[start_d..i].iter().collect();
                    let d = BigInt::parse_bytes(d_str.as_bytes(), 10)
                        .ok_or_else(|| ErreurNoyau::NombreInvalide(d_str.clone()))?;
                    if d.is_zero() {
                        return Err(ErreurCorps::DenominateurNul.into());
                    }
                    rat = BigRational::new(n, d);
                }
            }

            out.push(Tok::Num(rat));
            continue;
        }

        return Err(ErreurNoyau::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let out: Vec<String> = tokens
        .iter()
        .map(|t| match t {
            Tok::Num(r) => format_rat(r),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Neg => "neg".to_string(),
        })
        .collect();
    out.join(" ")
}
