//! Erreurs du noyau.
//!
//! Toute erreur est terminale pour l’évaluation en cours : pas de résultat
//! partiel, pas de reprise au milieu de la cascade.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("affichage impossible sur {largeur} caractères")]
    Largeur { largeur: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("erreur de parenthèses")]
    Parenthesis,

    #[error("hors domaine : {0}")]
    Range(&'static str),

    #[error("erreur : argument non entier")]
    NotInteger,

    #[error("nombre mal formé : {0:?}")]
    Parse(String),

    #[error("division par zéro")]
    DivisionByZero,

    #[error("expression invalide : {0}")]
    Malformed(&'static str),

    #[error(transparent)]
    Format(#[from] FormatError),
}
