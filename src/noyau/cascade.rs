// src/noyau/cascade.rs
//
// Cascade de réduction (sans parenthèses)
// ---------------------------------------
// Une séquence de jetons sans parenthèses -> une seule valeur.
// Ordre des passes :
//   2. E + run de ± -> marqueur d’exposant du littéral
//   3. runs de chiffres -> Value ; constantes -> Value
//   4. ± unaires (droite -> gauche)
//   5. fonctions à gauche (x², x³, !, 1/x)
//   6. opérateurs doubles (^, root, E, C, P), après le run de fonctions à droite
//   7. fonctions à droite et signes (droite -> gauche)
//   8. * /
//   9. + -
// puis produit des valeurs restantes (multiplication implicite : 2π, 3(4)).

use tracing::trace;

use super::erreur::EvalError;
use super::jetons::{format_tokens, AddOp, AngleScale, DualOp, SignOp, Tok};
use super::nombre::Nombre;

const OPERANDE_MANQUANT: EvalError = EvalError::Malformed("opérande manquant");

fn valeur(jetons: &[Tok], i: usize) -> Result<&Nombre, EvalError> {
    jetons.get(i).and_then(Tok::valeur).ok_or(OPERANDE_MANQUANT)
}

/// Fonction à droite ou signe unaire appliqué à `x`.
fn appliquer_unaire(t: &Tok, x: &Nombre, echelle: AngleScale) -> Result<Nombre, EvalError> {
    match t {
        Tok::Right(f) => f.appliquer(x, echelle),
        Tok::Sign(SignOp::Plus) => Ok(x.clone()),
        Tok::Sign(SignOp::Minus) => Ok(-x),
        _ => Err(OPERANDE_MANQUANT),
    }
}

fn est_unaire_droite(t: &Tok) -> bool {
    matches!(t, Tok::Right(_) | Tok::Sign(_))
}

/* ------------------------ 2. Exposants ------------------------ */

/// `2 E + - 3` -> `2 e - 3` : le run de ± se réduit à un `-` (ou exclusif).
/// Un `E` qui ne suit pas un chiffre reste un opérateur double (a × 10^b).
fn plier_exposants(jetons: Vec<Tok>) -> Vec<Tok> {
    let mut sortie = Vec::with_capacity(jetons.len());
    let mut it = jetons.into_iter().peekable();

    while let Some(t) = it.next() {
        let apres_chiffre = matches!(sortie.last(), Some(Tok::Numeral(_)));
        if t != Tok::Dual(DualOp::Exponent) || !apres_chiffre {
            sortie.push(t);
            continue;
        }

        sortie.push(Tok::Numeral('e'));
        let mut negatif = false;
        while let Some(&Tok::Additive(op)) = it.peek() {
            negatif ^= op == AddOp::Minus;
            it.next();
        }
        if negatif {
            sortie.push(Tok::Numeral('-'));
        }
    }

    sortie
}

/* ------------------------ 3. Littéraux ------------------------ */

fn assembler_nombres(jetons: Vec<Tok>) -> Result<Vec<Tok>, EvalError> {
    let mut sortie = Vec::with_capacity(jetons.len());
    let mut litteral = String::new();

    for t in jetons {
        if let Tok::Numeral(c) = t {
            litteral.push(c);
            continue;
        }
        if !litteral.is_empty() {
            sortie.push(Tok::Value(litteral.parse()?));
            litteral.clear();
        }
        match t {
            Tok::Constant(c) => sortie.push(Tok::Value(c.valeur())),
            autre => sortie.push(autre),
        }
    }
    if !litteral.is_empty() {
        sortie.push(Tok::Value(litteral.parse()?));
    }

    Ok(sortie)
}

/* ------------------------ 4. Signes ------------------------ */

/// Un ± est unaire en tête, ou s’il ne suit ni une valeur ni une fonction à
/// gauche (rien à sa gauche ne peut être son opérande).
fn signes_unaires(jetons: &mut [Tok]) {
    for i in (0..jetons.len()).rev() {
        let Tok::Additive(op) = jetons[i] else {
            continue;
        };
        let binaire = i > 0 && matches!(jetons[i - 1], Tok::Value(_) | Tok::Left(_));
        if !binaire {
            jetons[i] = Tok::Sign(match op {
                AddOp::Plus => SignOp::Plus,
                AddOp::Minus => SignOp::Minus,
            });
        }
    }
}

/* ------------------------ 5. Fonctions à gauche ------------------------ */

fn fonctions_gauche(jetons: &mut Vec<Tok>) -> Result<(), EvalError> {
    let mut i = 0;
    while i < jetons.len() {
        let Tok::Left(f) = jetons[i] else {
            i += 1;
            continue;
        };
        if i == 0 {
            return Err(OPERANDE_MANQUANT);
        }
        let r = f.appliquer(valeur(jetons, i - 1)?)?;
        jetons[i - 1] = Tok::Value(r);
        jetons.remove(i);
    }
    Ok(())
}

/* ------------------------ 6. Opérateurs doubles ------------------------ */

fn operateurs_doubles(jetons: &mut Vec<Tok>, echelle: AngleScale) -> Result<(), EvalError> {
    let mut i = 0;
    while i < jetons.len() {
        let Tok::Dual(op) = jetons[i] else {
            i += 1;
            continue;
        };
        if i == 0 {
            return Err(OPERANDE_MANQUANT);
        }

        // 2 ^ sqrt u- x : le run à droite se résout du plus proche de x vers ^
        let mut fin = i + 1;
        while jetons.get(fin).is_some_and(est_unaire_droite) {
            fin += 1;
        }
        for k in (i + 1..fin).rev() {
            let r = appliquer_unaire(&jetons[k], valeur(jetons, k + 1)?, echelle)?;
            jetons[k] = Tok::Value(r);
            jetons.remove(k + 1);
        }

        let r = op.appliquer(valeur(jetons, i - 1)?, valeur(jetons, i + 1)?)?;
        jetons[i - 1] = Tok::Value(r);
        jetons.drain(i..i + 2);
    }
    Ok(())
}

/* ------------------------ 7. Fonctions à droite ------------------------ */

fn fonctions_droite(jetons: &mut Vec<Tok>, echelle: AngleScale) -> Result<(), EvalError> {
    if jetons.len() < 2 {
        return Ok(());
    }
    // retirer i+1 ne décale pas les indices < i+1 : parcours descendant sûr
    for i in (0..jetons.len() - 1).rev() {
        if !est_unaire_droite(&jetons[i]) {
            continue;
        }
        let r = appliquer_unaire(&jetons[i], valeur(jetons, i + 1)?, echelle)?;
        jetons[i] = Tok::Value(r);
        jetons.remove(i + 1);
    }
    Ok(())
}

/* ------------------------ 8-9. Binaires ------------------------ */

/// * et / : ni en première ni en dernière position (laissés au contrôle final).
fn multiplicatifs(jetons: &mut Vec<Tok>) -> Result<(), EvalError> {
    let mut i = 1;
    while i + 1 < jetons.len() {
        let Tok::Multiplicative(op) = jetons[i] else {
            i += 1;
            continue;
        };
        let r = op.appliquer(valeur(jetons, i - 1)?, valeur(jetons, i + 1)?)?;
        jetons[i - 1] = Tok::Value(r);
        jetons.drain(i..i + 2);
    }
    Ok(())
}

fn additifs(jetons: &mut Vec<Tok>) -> Result<(), EvalError> {
    let mut i = 1;
    while i < jetons.len() {
        let Tok::Additive(op) = jetons[i] else {
            i += 1;
            continue;
        };
        let r = op.appliquer(valeur(jetons, i - 1)?, valeur(jetons, i + 1)?);
        jetons[i - 1] = Tok::Value(r);
        jetons.drain(i..i + 2);
    }
    Ok(())
}

/// Valeurs adjacentes restantes : multiplication implicite.
fn produit(jetons: Vec<Tok>) -> Result<Nombre, EvalError> {
    let mut acc: Option<Nombre> = None;
    for t in jetons {
        let Tok::Value(v) = t else {
            return Err(EvalError::Malformed("opérateur sans opérande"));
        };
        acc = Some(match acc {
            Some(a) => &a * &v,
            None => v,
        });
    }
    acc.ok_or(EvalError::Malformed("expression vide"))
}

/* ------------------------ Entrée ------------------------ */

/// Réduit une séquence sans parenthèses ni jeton mémoire à une valeur.
pub fn reduire(jetons: Vec<Tok>, echelle: AngleScale) -> Result<Nombre, EvalError> {
    let jetons = plier_exposants(jetons);
    let mut jetons = assembler_nombres(jetons)?;
    signes_unaires(&mut jetons);
    trace!(jetons = %format_tokens(&jetons), "littéraux et signes");

    fonctions_gauche(&mut jetons)?;
    operateurs_doubles(&mut jetons, echelle)?;
    trace!(jetons = %format_tokens(&jetons), "fonctions et opérateurs doubles");

    fonctions_droite(&mut jetons, echelle)?;
    multiplicatifs(&mut jetons)?;
    additifs(&mut jetons)?;
    trace!(jetons = %format_tokens(&jetons), "binaires");

    produit(jetons)
}
