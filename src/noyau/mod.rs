//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - nombre.rs    : décimal flottant BigInt × 10^e (60 chiffres)
//! - lecture.rs   : noyaux scalés (π, ln10, exp, ln, sin/cos, atan) + cache
//! - fonctions.rs : fonctions du pavé sur Nombre (domaines, unité d’angle)
//! - jetons.rs    : identifiants de touches -> jetons typés
//! - cascade.rs   : réduction d’un groupe sans parenthèses (neuf passes)
//! - eval.rs      : parenthèses + cascade + affichage
//! - format.rs    : affichage sur une largeur fixe
//! - session.rs   : registres mémoire / réponse

pub mod cascade;
pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod nombre;
pub mod session;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique
pub use erreur::{EvalError, FormatError};
pub use eval::{evaluate, evaluate_value, evaluate_width, split_memory_op, LARGEUR_AFFICHAGE};
pub use format::{format, format_with_minus, preformat};
pub use jetons::{
    assemble, assemble_report, libelle, split_identifiers, AngleScale, MemoryOp, Tok,
};
pub use nombre::Nombre;
pub use session::{Resultat, Session};
