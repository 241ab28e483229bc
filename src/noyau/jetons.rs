// src/noyau/jetons.rs
//
// Modèle de jetons + assemblage
// -----------------------------
// - Tok : ensemble fermé des jetons de touches (chiffres, opérateurs,
//   fonctions, constantes, parenthèses, mémoire)
// - assemble : identifiants externes (“#1”, “sin”, “ANS”…) -> Vec<Tok>
//
// ANS et RCL sont figés à l’assemblage : modifier ensuite les registres
// n’affecte pas une évaluation déjà assemblée.

use std::fmt;

use tracing::warn;

use super::erreur::EvalError;
use super::fonctions;
use super::nombre::Nombre;

/// Unité d’angle des fonctions trigonométriques.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleScale {
    Radians,
    #[default]
    Degrees,
}

impl AngleScale {
    pub fn basculer(self) -> Self {
        match self {
            AngleScale::Radians => AngleScale::Degrees,
            AngleScale::Degrees => AngleScale::Radians,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            AngleScale::Radians => "radians",
            AngleScale::Degrees => "degrés",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Constant {
    Pi,
    Ans(Nombre),
    Recall(Nombre),
}

impl Constant {
    pub fn valeur(&self) -> Nombre {
        match self {
            Constant::Pi => fonctions::pi(),
            Constant::Ans(v) | Constant::Recall(v) => v.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOp {
    Plus,
    Minus,
}

impl AddOp {
    pub fn appliquer(self, a: &Nombre, b: &Nombre) -> Nombre {
        match self {
            AddOp::Plus => a + b,
            AddOp::Minus => a - b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DualOp {
    Power,
    Root,
    Exponent,
    Combination,
    Permutation,
}

impl DualOp {
    pub fn appliquer(self, a: &Nombre, b: &Nombre) -> Result<Nombre, EvalError> {
        match self {
            DualOp::Power => fonctions::puissance(a, b),
            DualOp::Root => fonctions::racine(a, b),
            DualOp::Exponent => fonctions::exposant_dix(a, b),
            DualOp::Combination => fonctions::combinaison(a, b),
            DualOp::Permutation => fonctions::permutation(a, b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MulOp {
    Times,
    Divide,
}

impl MulOp {
    pub fn appliquer(self, a: &Nombre, b: &Nombre) -> Result<Nombre, EvalError> {
        match self {
            MulOp::Times => Ok(a * b),
            MulOp::Divide => fonctions::diviser(a, b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignOp {
    Plus,
    Minus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RightFn {
    Sqrt,
    Cbrt,
    Log,
    Ln,
    TenPow,
    Exp,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl RightFn {
    pub fn appliquer(self, x: &Nombre, echelle: AngleScale) -> Result<Nombre, EvalError> {
        match self {
            RightFn::Sqrt => fonctions::racine_carree(x),
            RightFn::Cbrt => Ok(fonctions::racine_cubique(x)),
            RightFn::Log => fonctions::log10(x),
            RightFn::Ln => fonctions::ln(x),
            RightFn::TenPow => fonctions::dix_puissance(x),
            RightFn::Exp => fonctions::exp(x),
            RightFn::Sin => fonctions::sin(x, echelle),
            RightFn::Cos => fonctions::cos(x, echelle),
            RightFn::Tan => fonctions::tan(x, echelle),
            RightFn::Asin => fonctions::asin(x, echelle),
            RightFn::Acos => fonctions::acos(x, echelle),
            RightFn::Atan => fonctions::atan(x, echelle),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeftFn {
    Square,
    Cube,
    Factorial,
    Inverse,
}

impl LeftFn {
    pub fn appliquer(self, x: &Nombre) -> Result<Nombre, EvalError> {
        match self {
            LeftFn::Square => Ok(x * x),
            LeftFn::Cube => Ok(&(x * x) * x),
            LeftFn::Factorial => fonctions::factorielle(x),
            LeftFn::Inverse => x.inverse().ok_or(EvalError::DivisionByZero),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryOp {
    Store,
    AddToMemory,
    SubtractFromMemory,
    ClearMemory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// `0`–`9`, `.`, `e` (marqueur d’exposant), `-` (signe d’exposant)
    Numeral(char),
    Constant(Constant),
    /// Résultat intermédiaire : n’existe que pendant la cascade.
    Value(Nombre),
    Additive(AddOp),
    Dual(DualOp),
    Multiplicative(MulOp),
    Sign(SignOp),
    Right(RightFn),
    Left(LeftFn),
    Paren(Paren),
    Memory(MemoryOp),
}

impl Tok {
    pub fn valeur(&self) -> Option<&Nombre> {
        match self {
            Tok::Value(v) => Some(v),
            _ => None,
        }
    }
}

/* ------------------------ Assemblage ------------------------ */

/// Un identifiant externe -> jeton. None si inconnu.
pub fn from_identifier(id: &str, memoire: &Nombre, reponse: &Nombre) -> Option<Tok> {
    let tok = match id {
        "#0" | "#1" | "#2" | "#3" | "#4" | "#5" | "#6" | "#7" | "#8" | "#9" | "#." | "#e"
        | "#-" => Tok::Numeral(id[1..].chars().next()?),

        "pi" => Tok::Constant(Constant::Pi),
        "ANS" => Tok::Constant(Constant::Ans(reponse.clone())),
        "RCL" => Tok::Constant(Constant::Recall(memoire.clone())),

        "+" => Tok::Additive(AddOp::Plus),
        "-" => Tok::Additive(AddOp::Minus),

        "E" => Tok::Dual(DualOp::Exponent),
        "^" => Tok::Dual(DualOp::Power),
        "C" => Tok::Dual(DualOp::Combination),
        "P" => Tok::Dual(DualOp::Permutation),
        "root" => Tok::Dual(DualOp::Root),

        "(" => Tok::Paren(Paren::Open),
        ")" => Tok::Paren(Paren::Close),

        "u+" => Tok::Sign(SignOp::Plus),
        "u-" => Tok::Sign(SignOp::Minus),

        "sqrt" => Tok::Right(RightFn::Sqrt),
        "cbrt" => Tok::Right(RightFn::Cbrt),
        "log" => Tok::Right(RightFn::Log),
        "ln" => Tok::Right(RightFn::Ln),
        "tenX" => Tok::Right(RightFn::TenPow),
        "exp" => Tok::Right(RightFn::Exp),
        "sin" => Tok::Right(RightFn::Sin),
        "cos" => Tok::Right(RightFn::Cos),
        "tan" => Tok::Right(RightFn::Tan),
        "asin" => Tok::Right(RightFn::Asin),
        "acos" => Tok::Right(RightFn::Acos),
        "atan" => Tok::Right(RightFn::Atan),

        "2" => Tok::Left(LeftFn::Square),
        "3" => Tok::Left(LeftFn::Cube),
        "!" => Tok::Left(LeftFn::Factorial),
        "inv" => Tok::Left(LeftFn::Inverse),

        "*" => Tok::Multiplicative(MulOp::Times),
        "/" => Tok::Multiplicative(MulOp::Divide),

        "STO" => Tok::Memory(MemoryOp::Store),
        "M+" => Tok::Memory(MemoryOp::AddToMemory),
        "M-" => Tok::Memory(MemoryOp::SubtractFromMemory),
        "MCL" => Tok::Memory(MemoryOp::ClearMemory),

        _ => return None,
    };
    Some(tok)
}

/// Résultat détaillé de l’assemblage : jetons + identifiants ignorés.
#[derive(Clone, Debug, Default)]
pub struct Assemblage {
    pub jetons: Vec<Tok>,
    pub ignores: Vec<String>,
}

pub fn assemble_report<S: AsRef<str>>(ids: &[S], memoire: &Nombre, reponse: &Nombre) -> Assemblage {
    let mut out = Assemblage::default();

    for id in ids {
        let id = id.as_ref();
        if id.is_empty() {
            continue;
        }
        match from_identifier(id, memoire, reponse) {
            Some(tok) => out.jetons.push(tok),
            None => {
                warn!(identifiant = id, "jeton non reconnu, ignoré");
                out.ignores.push(id.to_string());
            }
        }
    }

    out
}

/// Identifiants -> jetons ; les inconnus sont signalés puis ignorés.
pub fn assemble<S: AsRef<str>>(ids: &[S], memoire: &Nombre, reponse: &Nombre) -> Vec<Tok> {
    assemble_report(ids, memoire, reponse).jetons
}

/// Forme “fil” du pavé : identifiants séparés par des `;` (“#1;+;#2;”).
pub fn split_identifiers(fil: &str) -> Vec<&str> {
    fil.split(';').filter(|s| !s.is_empty()).collect()
}

/// Libellé de touche pour un identifiant (ligne d’entrée de l’UI).
pub fn libelle(id: &str) -> Option<&'static str> {
    let l = match id {
        "#0" => "0",
        "#1" => "1",
        "#2" => "2",
        "#3" => "3",
        "#4" => "4",
        "#5" => "5",
        "#6" => "6",
        "#7" => "7",
        "#8" => "8",
        "#9" => "9",
        "#." => ".",
        "#e" => "e",
        "#-" => "-",
        "pi" => "π",
        "ANS" => "Ans",
        "RCL" => "RCL",
        "+" => "+",
        "-" => "−",
        "E" => "E",
        "^" => "^",
        "C" => "C",
        "P" => "P",
        "root" => "ˣ√",
        "(" => "(",
        ")" => ")",
        "u+" => "+",
        "u-" => "−",
        "sqrt" => "√",
        "cbrt" => "∛",
        "log" => "log ",
        "ln" => "ln ",
        "tenX" => "10^",
        "exp" => "exp ",
        "sin" => "sin ",
        "cos" => "cos ",
        "tan" => "tan ",
        "asin" => "asin ",
        "acos" => "acos ",
        "atan" => "atan ",
        "2" => "²",
        "3" => "³",
        "!" => "!",
        "inv" => "⁻¹",
        "*" => "×",
        "/" => "÷",
        "STO" => "STO ",
        "M+" => "M+ ",
        "M-" => "M− ",
        "MCL" => "MCL ",
        _ => return None,
    };
    Some(l)
}

/* ------------------------ Affichage (debug / traces) ------------------------ */

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Numeral(c) => write!(f, "{c}"),
            Tok::Constant(Constant::Pi) => write!(f, "π"),
            Tok::Constant(Constant::Ans(_)) => write!(f, "Ans"),
            Tok::Constant(Constant::Recall(_)) => write!(f, "RCL"),
            Tok::Value(v) => write!(f, "[{v}]"),
            Tok::Additive(AddOp::Plus) => write!(f, "+"),
            Tok::Additive(AddOp::Minus) => write!(f, "-"),
            Tok::Dual(op) => {
                let s = match op {
                    DualOp::Power => "^",
                    DualOp::Root => "root",
                    DualOp::Exponent => "E",
                    DualOp::Combination => "C",
                    DualOp::Permutation => "P",
                };
                write!(f, "{s}")
            }
            Tok::Multiplicative(MulOp::Times) => write!(f, "*"),
            Tok::Multiplicative(MulOp::Divide) => write!(f, "/"),
            Tok::Sign(SignOp::Plus) => write!(f, "u+"),
            Tok::Sign(SignOp::Minus) => write!(f, "u-"),
            Tok::Right(g) => write!(f, "{}", format!("{g:?}").to_lowercase()),
            Tok::Left(g) => write!(f, "{}", format!("{g:?}").to_lowercase()),
            Tok::Paren(Paren::Open) => write!(f, "("),
            Tok::Paren(Paren::Close) => write!(f, ")"),
            Tok::Memory(op) => write!(f, "{op:?}"),
        }
    }
}

/// Format utilitaire (traces de la cascade) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
