//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : trouver les limites sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//! - comparaisons à tolérance fixe (10^-50 et mieux) sur des valeurs d’ordre 1
//!
//! Notes :
//! - Les fonctions à droite s’appliquent de droite à gauche : “ln;exp;#2” = ln(exp(2)).
//! - Les fonctions à gauche (², ³, !, ⁻¹) passent avant : “sin;#3;2” = sin(3²).
//!   D’où les parenthèses autour de sin/cos avant un carré.

use std::time::{Duration, Instant};

use super::erreur::EvalError;
use super::jetons::AngleScale;
use super::nombre::Nombre;
use super::session::Session;

fn valeur(fil: &str, echelle: AngleScale) -> Nombre {
    Session::new(echelle, 24)
        .calculer_fil(fil)
        .unwrap_or_else(|e| panic!("fil={fil:?} err={e}"))
        .valeur
}

fn deg(fil: &str) -> Nombre {
    valeur(fil, AngleScale::Degrees)
}

fn rad(fil: &str) -> Nombre {
    valeur(fil, AngleScale::Radians)
}

fn n(s: &str) -> Nombre {
    s.parse().unwrap_or_else(|e| panic!("parse({s:?}) : {e}"))
}

/// |a − b| ≤ 10^ordre
fn assert_proche(a: &Nombre, b: &Nombre, ordre: i64, contexte: &str) {
    let ecart = (a - b).abs();
    assert!(
        ecart <= Nombre::pow10(ordre),
        "{contexte} : {a} vs {b} (écart {ecart})"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Identités trigonométriques ------------------------ */

#[test]
fn sci_pythagore_trig() {
    let un = Nombre::one();
    for angle in ["#3;#7", "#1;#2;#3;#.;#4", "#0;#.;#0;#1", "#2;#5;#0;#0"] {
        let fil = format!("(;sin;{angle};);2;+;(;cos;{angle};);2");
        assert_proche(&deg(&fil), &un, -50, &fil);
        assert_proche(&rad(&fil), &un, -50, &fil);
    }
}

#[test]
fn sci_periodicite_degres() {
    // réduction modulo 360 exacte : même argument réduit, même valeur
    assert_eq!(deg("sin;(;#3;#0;+;#3;#6;#0;*;#7;)"), deg("sin;#3;#0"));
    assert_eq!(deg("cos;(;#4;#0;-;#7;#2;#0;)"), deg("cos;#4;#0"));
    assert_eq!(deg("sin;#1;E;#1;#0;#0"), deg("sin;#2;#8;#0"));
}

#[test]
fn sci_symetries() {
    for x in ["#0;#.;#7", "#2;#.;#5", "#1;#0"] {
        let s = rad(&format!("sin;{x}"));
        let s_moins = rad(&format!("sin;u-;{x}"));
        assert_proche(&s_moins, &-s, -55, x);

        let c = rad(&format!("cos;{x}"));
        let c_moins = rad(&format!("cos;u-;{x}"));
        assert_proche(&c_moins, &c, -55, x);
    }

    assert_proche(&deg("cos;u-;#4;#0"), &deg("cos;#4;#0"), -55, "cos(−40°)");
}

#[test]
fn sci_fonctions_inverses() {
    assert_proche(&rad("asin;sin;#0;#.;#5"), &n("0.5"), -50, "asin∘sin");
    // atan n’accepte que [-1, 1] : tan(0.6) ≈ 0.684
    assert_proche(&rad("atan;tan;#0;#.;#6"), &n("0.6"), -50, "atan∘tan");
    assert!(Session::default().calculer_fil("atan;#2").is_err());
    assert_proche(&deg("acos;cos;#4;#0"), &Nombre::from(40), -48, "acos∘cos");
    assert_proche(&deg("atan;#1"), &Nombre::from(45), -50, "atan(1)");
}

/* ------------------------ Exponentielles et logarithmes ------------------------ */

#[test]
fn sci_ln_exp_aller_retour() {
    assert_proche(&deg("ln;exp;#2;#.;#5"), &n("2.5"), -50, "ln∘exp");
    assert_proche(&deg("exp;ln;#7"), &Nombre::from(7), -50, "exp∘ln");
    assert_proche(&deg("tenX;log;#3;#.;#2"), &n("3.2"), -50, "10^∘log");
    assert_eq!(deg("log;#1;E;#4;#2"), Nombre::from(42));
}

#[test]
fn sci_ln_produit() {
    // ln(ab) = ln a + ln b
    let gauche = deg("ln;(;#6;*;#3;#5;)");
    let droite = deg("ln;#6;+;ln;#3;#5");
    assert_proche(&gauche, &droite, -50, "ln(6·35)");
}

/* ------------------------ Précision de travail ------------------------ */

#[test]
fn sci_pi_soixante_chiffres() {
    let reference = n("3.14159265358979323846264338327950288419716939937510582097494");
    assert_proche(&deg("pi"), &reference, -58, "π");
}

#[test]
fn sci_racines() {
    assert_proche(&deg("(;sqrt;#2;);2"), &Nombre::from(2), -57, "√2²");
    assert_eq!(deg("cbrt;#2;#7"), Nombre::from(3));
    assert_eq!(deg("#3;root;#6;#4"), Nombre::from(4));
    assert_eq!(deg("cbrt;u-;#8"), Nombre::from(-2));
}

#[test]
fn sci_entiers_exacts() {
    assert_eq!(deg("#2;#0;!"), n("2432902008176640000"));
    assert_eq!(deg("#5;#2;C;#5"), Nombre::from(2_598_960));
    assert_eq!(deg("#2;^;#1;#0;#0;#0").ordre(), Some(301));
    assert_proche(
        &deg("#1;/;#3;*;#3"),
        &Nombre::one(),
        -58,
        "(1/3)·3",
    );
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut fil = String::new();
    for _ in 0..500 {
        fil.push_str("#1;+;");
    }
    fil.push_str("#1");
    budget(t0, max);

    assert_eq!(deg(&fil), Nombre::from(501));
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let profondeur = 300;
    let fil = format!("{}#7{}", "(;".repeat(profondeur), ";)".repeat(profondeur));
    assert_eq!(deg(&fil), Nombre::from(7));
    budget(t0, max);
}

#[test]
fn sci_stress_grands_arguments() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 1000! (2568 chiffres) arrondi à la précision de travail
    assert_eq!(deg("#1;#0;#0;#0;!").ordre(), Some(2567));
    budget(t0, max);

    // sin en degrés d’un argument énorme : réduction exacte
    assert_eq!(deg("sin;#1;E;#2;#0;#0"), deg("sin;#2;#8;#0"));
    budget(t0, max);
}

#[test]
fn sci_stress_operandes_demesures() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 10^3000 C 3000 : refus sur la taille estimée, sans construire le résultat
    let r = Session::default().calculer_fil("#1;#e;#3;#0;#0;#0;C;#3;#0;#0;#0");
    assert!(matches!(r, Err(EvalError::Range(_))), "{r:?}");
    budget(t0, max);

    // angle en degrés minuscule : pas de module 360·10^k
    let fil = format!("sin;#1;#e;#-;{}", "#9;".repeat(14) + "#9");
    assert!(deg(&fil).is_zero());
    assert!(deg("sin;#1;#e;#-;#1;#0;#0;#0;#0;#0;#0;#0").is_zero());
    budget(t0, max);
}
