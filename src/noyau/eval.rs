//! Noyau: évaluation d’une séquence de touches
//!
//! parenthèses (paire la plus intérieure d’abord) -> cascade -> affichage.
//!
//! L’évaluation est une fonction pure de (jetons, unité d’angle) : les
//! registres mémoire/réponse sont déjà figés dans les jetons.

use super::cascade::reduire;
use super::erreur::EvalError;
use super::format::format;
use super::jetons::{AngleScale, MemoryOp, Paren, Tok};
use super::nombre::Nombre;

/// Largeur d’affichage par défaut (caractères).
pub const LARGEUR_AFFICHAGE: usize = 24;

/// Sépare la touche mémoire de tête (STO, M+, M−, MCL) du calcul.
pub fn split_memory_op(mut jetons: Vec<Tok>) -> (Option<MemoryOp>, Vec<Tok>) {
    match jetons.first() {
        Some(&Tok::Memory(op)) => {
            jetons.remove(0);
            (Some(op), jetons)
        }
        _ => (None, jetons),
    }
}

/// Paire à réduire : dernière `(` avant la première `)`.
fn paire_interieure(jetons: &[Tok]) -> Result<Option<(usize, usize)>, EvalError> {
    let ouvrante = Tok::Paren(Paren::Open);
    let fermante = Tok::Paren(Paren::Close);

    match jetons.iter().position(|t| *t == fermante) {
        Some(f) => jetons[..f]
            .iter()
            .rposition(|t| *t == ouvrante)
            .map(|o| Some((o, f)))
            .ok_or(EvalError::Parenthesis),
        None if jetons.contains(&ouvrante) => Err(EvalError::Parenthesis),
        None => Ok(None),
    }
}

/// Jetons -> valeur, sans mise en forme.
pub fn evaluate_value(jetons: Vec<Tok>, echelle: AngleScale) -> Result<Nombre, EvalError> {
    let (_, mut jetons) = split_memory_op(jetons);
    if jetons.iter().any(|t| matches!(t, Tok::Memory(_))) {
        return Err(EvalError::Malformed("touche mémoire hors de la tête"));
    }

    // comptes inégaux : erreur de parenthèses avant toute réduction
    let ouvrantes = jetons.iter().filter(|t| **t == Tok::Paren(Paren::Open)).count();
    let fermantes = jetons.iter().filter(|t| **t == Tok::Paren(Paren::Close)).count();
    if ouvrantes != fermantes {
        return Err(EvalError::Parenthesis);
    }

    while let Some((o, f)) = paire_interieure(&jetons)? {
        let groupe: Vec<Tok> = jetons.drain(o + 1..f).collect();
        if groupe.is_empty() {
            return Err(EvalError::Malformed("parenthèses vides"));
        }
        let v = reduire(groupe, echelle)?;

        // jetons[o] = '(' et jetons[o + 1] = ')'
        jetons[o] = Tok::Value(v);
        jetons.remove(o + 1);
    }

    reduire(jetons, echelle)
}

/// API publique : jetons -> (valeur, affichage sur `largeur` caractères).
pub fn evaluate_width(
    jetons: Vec<Tok>,
    echelle: AngleScale,
    largeur: usize,
) -> Result<(Nombre, String), EvalError> {
    let valeur = evaluate_value(jetons, echelle)?;
    let affichage = format(&valeur, largeur)?;
    Ok((valeur, affichage))
}

/// Comme [`evaluate_width`], à la largeur par défaut.
pub fn evaluate(jetons: Vec<Tok>, echelle: AngleScale) -> Result<(Nombre, String), EvalError> {
    evaluate_width(jetons, echelle, LARGEUR_AFFICHAGE)
}
