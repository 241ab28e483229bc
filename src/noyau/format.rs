// src/noyau/format.rs
//
// Affichage largeur fixe
// ----------------------
// Le résultat doit tenir en `C` caractères avec le plus de chiffres
// significatifs possible. Deux rendus candidats :
// - décimal  (#.#)    : précision réduite jusqu’à tenir, “.0” final retiré en dernier recours
// - scientifique (A±eB) : idem, exposant toujours écrit sauf pour [1, 10)
// |x| ≥ 1 : décimal s’il tient, sinon scientifique.
// |x| < 1 : celui qui garde le plus de chiffres significatifs (égalité -> décimal).

use super::erreur::FormatError;
use super::nombre::Nombre;

/// Bornes d’ordre du rendu décimal : fixe si `min < ordre < max`.
#[derive(Clone, Copy, Debug)]
enum Notation {
    /// min(-(n/3), -5) < ordre < n
    Auto,
    /// jamais de forme fixe (sauf ordre 0, sans exposant)
    Scientifique,
}

/* ------------------------ Rendu à n chiffres ------------------------ */

/// |x| à `n` chiffres significatifs, zéros finaux retirés (un chiffre gardé
/// après le point), exposant `e+N` / `e-N`.
fn rendu(x: &Nombre, n: usize, notation: Notation) -> String {
    if x.is_zero() {
        return "0.0".to_string();
    }

    let (mut chiffres, ordre) = x.chiffres(n);
    let n = n.max(1) as i64;
    let (min_fixe, max_fixe) = match notation {
        Notation::Auto => ((-(n / 3)).min(-5), n),
        Notation::Scientifique => (0, 0),
    };

    let (coupure, exposant) = if min_fixe < ordre && ordre < max_fixe {
        if ordre < 0 {
            chiffres = format!("{}{chiffres}", "0".repeat(ordre.unsigned_abs() as usize));
            (1, 0)
        } else {
            ((ordre + 1) as usize, 0)
        }
    } else {
        (1, ordre)
    };

    let (tete, queue) = chiffres.split_at(coupure);
    let mut s = format!("{tete}.{queue}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.push('0');
    }

    match exposant {
        0 => s,
        e if e > 0 => format!("{s}e+{e}"),
        e => format!("{s}e{e}"),
    }
}

/* ------------------------ Réductions ------------------------ */

pub fn strip_point_zero(s: &str) -> &str {
    s.strip_suffix(".0").unwrap_or(s)
}

fn longueur(s: &str) -> usize {
    s.chars().count()
}

/// Plus longue écriture A±eB de |x| tenant en `c` caractères.
pub fn shrink_sci(x: &Nombre, c: usize) -> Option<String> {
    let mut l = c;
    let mut sci = rendu(x, l, Notation::Scientifique);

    while longueur(&sci) > c {
        if l <= 1 {
            // dernier essai : 1.0e+30 -> 1e+30
            let court = match sci.split_once('e') {
                Some((m, e)) => format!("{}e{e}", strip_point_zero(m)),
                None => strip_point_zero(&sci).to_string(),
            };
            return (longueur(&court) <= c).then_some(court);
        }
        l -= 1;
        sci = rendu(x, l, Notation::Scientifique);
    }
    Some(sci)
}

/// Plus longue écriture #.# de |x| tenant en `c` caractères ; `None` dès
/// que le rendu bascule en notation exposant.
pub fn shrink_dec(x: &Nombre, c: usize) -> Option<String> {
    let mut l = c;
    let mut dec = rendu(x, l, Notation::Auto);
    if dec.contains('e') {
        return None;
    }

    while longueur(&dec) > c {
        let court = strip_point_zero(&dec);
        if longueur(court) <= c {
            return Some(court.to_string());
        }
        if l <= 1 {
            return None;
        }
        l -= 1;
        dec = rendu(x, l, Notation::Auto);
        if dec.contains('e') {
            return None;
        }
    }
    Some(dec)
}

/// Chiffres significatifs d’un rendu : exposant ignoré, “.0” final ignoré,
/// zéros de tête ignorés.
pub fn significant_figures(s: &str) -> usize {
    let mantisse = s.split('e').next().unwrap_or("");
    strip_point_zero(mantisse)
        .chars()
        .filter(|c| *c != '.')
        .skip_while(|c| *c == '0')
        .count()
}

/* ------------------------ API ------------------------ */

/// Rendu de |x| (x ≥ 0 attendu) sur `c` caractères au plus.
pub fn preformat(x: &Nombre, c: usize) -> Result<String, FormatError> {
    let choisi = if *x >= Nombre::one() {
        shrink_dec(x, c).or_else(|| shrink_sci(x, c))
    } else {
        match (shrink_dec(x, c), shrink_sci(x, c)) {
            (None, sci) => sci,
            (dec, None) => dec,
            (Some(dec), Some(sci)) => {
                if significant_figures(&sci) > significant_figures(&dec) {
                    Some(sci)
                } else {
                    Some(dec)
                }
            }
        }
    };
    choisi.ok_or(FormatError::Largeur { largeur: c })
}

/// Comme [`format`], avec un glyphe de signe moins au choix (ex. `'−'`).
///
/// Le signe d’un négatif prend un caractère du budget : la sortie ne
/// dépasse jamais `c` caractères. Un négatif peut donc échouer là où sa
/// valeur absolue tient : à `c = 6`, `1e-100` s’affiche mais `-1e-100`
/// rend [`FormatError::Largeur`].
pub fn format_with_minus(x: &Nombre, c: usize, moins: char) -> Result<String, FormatError> {
    let negatif = x.is_negative();
    let budget = if negatif { c.saturating_sub(1) } else { c };

    let corps = preformat(&x.abs(), budget)
        .map_err(|_| FormatError::Largeur { largeur: c })?
        .replace('-', &moins.to_string());

    Ok(if negatif {
        format!("{moins}{corps}")
    } else {
        corps
    })
}

pub fn format(x: &Nombre, c: usize) -> Result<String, FormatError> {
    format_with_minus(x, c, '-')
}
