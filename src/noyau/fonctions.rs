//! Sémantique numérique des opérateurs et fonctions de la calculatrice.
//!
//! Transcendantes : calcul “scalé” à `W` chiffres (précision + garde) via
//! lecture.rs, puis arrondi à `PRECISION` chiffres significatifs.
//! Les résultats trigonométriques sous 1e-50 sont ramenés à zéro exact.

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::EvalError;
use super::jetons::AngleScale;
use super::lecture::{atan_scaled, exp_scaled, ln10_scaled, ln_scaled, pi_scaled, sin_cos_scaled, sqrt_scaled};
use super::nombre::{arrondi_div, nb_chiffres, pow10, Nombre, EXPOSANT_MAX, PRECISION};

/// Chiffres de travail des noyaux scalés.
const W: usize = PRECISION + 15;

/// Garde-fous (anti-gel) : au-delà, erreur de domaine.
const FACTORIELLE_MAX: i64 = 100_000;
const BINOMIAL_PAS_MAX: u64 = 100_000;
const BINOMIAL_CHIFFRES_MAX: f64 = 100_000.0;
const ORDRE_TRIG_MAX: i64 = 1000;

/// Seuil d’ordre : |x| < 1e-50 <=> ordre(x) < -50.
const ORDRE_ZERO_TRIG: i64 = -50;

const DEPASSEMENT: EvalError = EvalError::Range("dépassement de capacité");

pub fn pi() -> Nombre {
    Nombre::from_scaled(pi_scaled(W), W)
}

fn arrondi_zero(d: Nombre) -> Nombre {
    match d.ordre() {
        Some(o) if o < ORDRE_ZERO_TRIG => Nombre::zero(),
        _ => d,
    }
}

/// log10|x| approché (estimation d’ordre de grandeur). x ≠ 0.
fn log10_approx(x: &Nombre) -> f64 {
    let (tete, ordre) = x.chiffres(17);
    let t: f64 = tete.parse().unwrap_or(1e16);
    ordre as f64 + (t / 1e16).log10()
}

/* ------------------------ Arithmétique ------------------------ */

pub fn diviser(a: &Nombre, b: &Nombre) -> Result<Nombre, EvalError> {
    a.checked_div(b).ok_or(EvalError::DivisionByZero)
}

/* ------------------------ exp / ln / log ------------------------ */

/// e^x.
pub fn exp(x: &Nombre) -> Result<Nombre, EvalError> {
    if x.is_zero() {
        return Ok(Nombre::one());
    }
    // |x| ≥ 1e17 : e^x sort des exposants représentables
    if x.ordre().unwrap_or(0) >= 17 {
        return if x.is_negative() {
            Ok(Nombre::zero())
        } else {
            Err(DEPASSEMENT)
        };
    }

    // x = k·ln10 + r, r ∈ [0, ln10) => e^x = e^r × 10^k
    let xs = x.to_scaled(W);
    let l10 = ln10_scaled(W);
    let mut k = &xs / &l10;
    if (&xs - &k * &l10).is_negative() {
        k -= BigInt::one();
    }
    let r = &xs - &k * &l10;

    let k = k.to_i64().ok_or(DEPASSEMENT)?;
    if k > EXPOSANT_MAX {
        return Err(DEPASSEMENT);
    }
    if k < -EXPOSANT_MAX {
        return Ok(Nombre::zero());
    }

    Ok(Nombre::from_parts(exp_scaled(&r, W), k - W as i64))
}

/// ln x scalé à W, x > 0 : x = y × 10^o, y ∈ [1, 10).
fn ln_scaled_nombre(x: &Nombre) -> BigInt {
    let o = x.ordre().unwrap_or(0);
    let y = x.decaler(-o).to_scaled(W);
    ln_scaled(&y, W) + BigInt::from(o) * ln10_scaled(W)
}

pub fn ln(x: &Nombre) -> Result<Nombre, EvalError> {
    if !x.is_positive() {
        return Err(EvalError::Range("ln d’un nombre ≤ 0"));
    }
    Ok(Nombre::from_scaled(ln_scaled_nombre(x), W))
}

pub fn log10(x: &Nombre) -> Result<Nombre, EvalError> {
    if !x.is_positive() {
        return Err(EvalError::Range("log d’un nombre ≤ 0"));
    }
    let l = ln_scaled_nombre(x) * pow10(W) / ln10_scaled(W);
    Ok(Nombre::from_scaled(l, W))
}

/// 10^x (exact pour x entier).
pub fn dix_puissance(x: &Nombre) -> Result<Nombre, EvalError> {
    if let Some(n) = x.to_i64() {
        if n.unsigned_abs() > EXPOSANT_MAX as u64 {
            return if n < 0 { Ok(Nombre::zero()) } else { Err(DEPASSEMENT) };
        }
        return Ok(Nombre::pow10(n));
    }
    let ln10 = Nombre::from_scaled(ln10_scaled(W), W);
    exp(&(x * &ln10))
}

/* ------------------------ Puissances et racines ------------------------ */

/// a^b. Base négative : exposant entier obligatoire.
pub fn puissance(a: &Nombre, b: &Nombre) -> Result<Nombre, EvalError> {
    if b.is_zero() {
        return Ok(Nombre::one());
    }
    if a.is_zero() {
        return if b.is_negative() {
            Err(EvalError::DivisionByZero)
        } else {
            Ok(Nombre::zero())
        };
    }
    if a.is_negative() && !b.is_integer() {
        return Err(EvalError::Range("puissance non entière d’un nombre négatif"));
    }

    if let Some(n) = b.to_i64() {
        return puissance_entiere(a, n);
    }

    // exposant non entier (a > 0) ou entier immense
    let impair = b
        .to_bigint()
        .map(|n| !(n % 2u32).is_zero())
        .unwrap_or(false);
    let r = exp(&(b * &ln(&a.abs())?))?;
    Ok(if a.is_negative() && impair { -r } else { r })
}

/// Exponentiation rapide (carrés successifs), résultat borné en ordre.
fn puissance_entiere(a: &Nombre, n: i64) -> Result<Nombre, EvalError> {
    let estimation = log10_approx(a) * n as f64;
    if estimation > EXPOSANT_MAX as f64 {
        return Err(DEPASSEMENT);
    }
    if estimation < -(EXPOSANT_MAX as f64) {
        return Ok(Nombre::zero());
    }

    let mut e = n.unsigned_abs();
    let mut acc = Nombre::one();
    let mut b = a.clone();

    while e > 0 {
        if (e & 1) == 1 {
            acc = &acc * &b;
        }
        e >>= 1;
        if e > 0 {
            b = &b * &b;
        }
    }

    if n < 0 {
        acc.inverse().ok_or(EvalError::DivisionByZero)
    } else {
        Ok(acc)
    }
}

/// a × 10^b (touche E hors littéral).
pub fn exposant_dix(a: &Nombre, b: &Nombre) -> Result<Nombre, EvalError> {
    if let Some(n) = b.to_i64() {
        if n.unsigned_abs() <= EXPOSANT_MAX as u64 {
            return Ok(a.decaler(n));
        }
    }
    Ok(a * &dix_puissance(b)?)
}

pub fn racine_carree(x: &Nombre) -> Result<Nombre, EvalError> {
    if x.is_negative() {
        return Err(EvalError::Range("racine carrée d’un nombre négatif"));
    }
    if x.is_zero() {
        return Ok(Nombre::zero());
    }

    // mantisse élargie à 2·W chiffres, exposant pair
    let mut k = (2 * W).saturating_sub(nb_chiffres(x.mantisse())) as i64;
    let mut e = x.exposant() - k;
    if e.rem_euclid(2) != 0 {
        k += 1;
        e -= 1;
    }
    let m = x.mantisse() * pow10(k as usize);
    Ok(Nombre::from_parts(m.sqrt(), e / 2))
}

/// Racine cubique réelle (négatifs acceptés).
pub fn racine_cubique(x: &Nombre) -> Nombre {
    if x.is_zero() {
        return Nombre::zero();
    }

    let mut k = (3 * W).saturating_sub(nb_chiffres(x.mantisse())) as i64;
    let mut e = x.exposant() - k;
    let r = e.rem_euclid(3);
    k += r;
    e -= r;

    let m = x.mantisse().abs() * pow10(k as usize);
    let racine = Nombre::from_parts(m.cbrt(), e / 3);
    if x.is_negative() {
        -racine
    } else {
        racine
    }
}

/// `indice root radicande` = radicande^(1/indice).
pub fn racine(indice: &Nombre, radicande: &Nombre) -> Result<Nombre, EvalError> {
    let inverse = indice.inverse().ok_or(EvalError::DivisionByZero)?;
    if radicande.is_negative() && !inverse.is_integer() {
        return Err(EvalError::Range("racine d’un nombre négatif"));
    }

    match indice.to_i64() {
        Some(2) => racine_carree(radicande),
        Some(3) => Ok(racine_cubique(radicande)),
        _ => puissance(radicande, &inverse),
    }
}

/* ------------------------ Combinatoire ------------------------ */

fn entier(x: &Nombre) -> Result<BigInt, EvalError> {
    if !x.is_integer() {
        return Err(EvalError::NotInteger);
    }
    x.to_bigint().ok_or(EvalError::Range("entier trop grand"))
}

/// Coefficient binomial exact ; 0 si r < 0 ou r > n.
fn binomial(n: &BigInt, r: &BigInt) -> Result<BigInt, EvalError> {
    if n.is_negative() {
        return Err(EvalError::Range("combinatoire avec n négatif"));
    }
    if r.is_negative() || r > n {
        return Ok(BigInt::zero());
    }

    let complement = n - r;
    let k = if *r < complement { r.clone() } else { complement };
    let k = k
        .to_u64()
        .filter(|k| *k <= BINOMIAL_PAS_MAX)
        .ok_or(EvalError::Range("combinatoire trop grande"))?;
    if k == 0 {
        return Ok(BigInt::one());
    }

    // C(n, k) ≤ (e·n/k)^k : taille du résultat avant de le construire
    let log_n = n.bits() as f64 * std::f64::consts::LOG10_2;
    let chiffres = k as f64 * (log_n - (k as f64).log10() + std::f64::consts::LOG10_E);
    if chiffres > BINOMIAL_CHIFFRES_MAX {
        return Err(EvalError::Range("combinatoire trop grande"));
    }

    // produit de i entiers consécutifs divisible par i! : exact à chaque pas
    let base = n - BigInt::from(k);
    let mut acc = BigInt::one();
    for i in 1..=k {
        acc = acc * (&base + i) / i;
    }
    Ok(acc)
}

/// n C r.
pub fn combinaison(n: &Nombre, r: &Nombre) -> Result<Nombre, EvalError> {
    let (n, r) = (entier(n)?, entier(r)?);
    Ok(Nombre::from(binomial(&n, &r)?))
}

/// n P r, calculé comme binomial(n, n − r).
pub fn permutation(n: &Nombre, r: &Nombre) -> Result<Nombre, EvalError> {
    let (n, r) = (entier(n)?, entier(r)?);
    let complement = &n - &r;
    Ok(Nombre::from(binomial(&n, &complement)?))
}

pub fn factorielle(x: &Nombre) -> Result<Nombre, EvalError> {
    if !x.is_integer() {
        return Err(EvalError::NotInteger);
    }
    if x.is_negative() {
        return Err(EvalError::Range("factorielle d’un nombre négatif"));
    }
    let n = x
        .to_i64()
        .filter(|n| *n <= FACTORIELLE_MAX)
        .ok_or(DEPASSEMENT)?;

    let mut acc = Nombre::one();
    for i in 2..=n {
        acc = &acc * &Nombre::from(i);
    }
    Ok(acc)
}

/* ------------------------ Trigonométrie ------------------------ */

/// x mod 360 exact, dans [0, 360) pour |x| ≥ 360.
///
/// |x| < 360 est rendu tel quel (négatif compris) : aucun module à construire.
fn modulo_360(x: &Nombre) -> Nombre {
    if x.abs() < Nombre::from(360) {
        return x.clone();
    }
    let tour = BigInt::from(360);
    let (m, e) = (x.mantisse(), x.exposant());

    if e >= 0 {
        let p = BigInt::from(10).modpow(&BigInt::from(e), &tour);
        let mut r = (m * p) % &tour;
        if r.is_negative() {
            r += &tour;
        }
        return Nombre::from(r);
    }

    // m / 10^k mod 360 = (m mod 360·10^k) / 10^k
    let module = pow10(e.unsigned_abs() as usize) * 360u32;
    let mut r = m % &module;
    if r.is_negative() {
        r += &module;
    }
    Nombre::from_parts(r, e)
}

/// Angle -> radians scalés à W, réduits dans [−π, π].
fn radians_reduits(x: &Nombre, echelle: AngleScale) -> Result<BigInt, EvalError> {
    let o = x.ordre().unwrap_or(0);
    if o > ORDRE_TRIG_MAX {
        return Err(EvalError::Range("angle trop grand"));
    }

    match echelle {
        AngleScale::Radians => {
            // chiffres supplémentaires : la réduction mange l’ordre de x
            let extra = (o + 1).max(0) as usize;
            let d = W + extra;
            let xs = x.to_scaled(d);
            let tour = pi_scaled(d) * 2u32;
            let k = arrondi_div(&xs, &tour);
            let r = xs - k * tour;
            Ok(r / pow10(extra))
        }
        AngleScale::Degrees => {
            let reste = modulo_360(x);
            let pi_s = pi_scaled(W);
            let mut r = reste.to_scaled(W) * &pi_s / (pow10(W) * 180u32);
            if r > pi_s {
                r -= &pi_s * 2u32;
            } else if r < -&pi_s {
                r += &pi_s * 2u32;
            }
            Ok(r)
        }
    }
}

/// Radians scalés -> unité de l’appelant, arrondi et zéro si négligeable.
fn depuis_radians(r: BigInt, echelle: AngleScale) -> Nombre {
    let r = match echelle {
        AngleScale::Radians => r,
        AngleScale::Degrees => r * 180u32 * pow10(W) / pi_scaled(W),
    };
    arrondi_zero(Nombre::from_scaled(r, W))
}

pub fn sin(x: &Nombre, echelle: AngleScale) -> Result<Nombre, EvalError> {
    let (s, _) = sin_cos_scaled(&radians_reduits(x, echelle)?, W);
    Ok(arrondi_zero(Nombre::from_scaled(s, W)))
}

pub fn cos(x: &Nombre, echelle: AngleScale) -> Result<Nombre, EvalError> {
    let (_, c) = sin_cos_scaled(&radians_reduits(x, echelle)?, W);
    Ok(arrondi_zero(Nombre::from_scaled(c, W)))
}

pub fn tan(x: &Nombre, echelle: AngleScale) -> Result<Nombre, EvalError> {
    let (s, c) = sin_cos_scaled(&radians_reduits(x, echelle)?, W);
    if arrondi_zero(Nombre::from_scaled(c.clone(), W)).is_zero() {
        return Err(EvalError::Range("tangente indéfinie"));
    }
    Ok(arrondi_zero(Nombre::from_scaled(s * pow10(W) / c, W)))
}

fn dans_unite(x: &Nombre, motif: &'static str) -> Result<BigInt, EvalError> {
    if x.abs() > Nombre::one() {
        return Err(EvalError::Range(motif));
    }
    Ok(x.to_scaled(W))
}

fn asin_scaled(xs: &BigInt) -> BigInt {
    let scale = pow10(W);
    if xs.abs() == scale {
        let demi_pi = pi_scaled(W) / 2u32;
        return if xs.is_negative() { -demi_pi } else { demi_pi };
    }
    let cos = sqrt_scaled(&(&scale - xs * xs / &scale), W);
    atan_scaled(&(xs * &scale / cos), W)
}

pub fn asin(x: &Nombre, echelle: AngleScale) -> Result<Nombre, EvalError> {
    let xs = dans_unite(x, "arc sinus hors de [-1, 1]")?;
    Ok(depuis_radians(asin_scaled(&xs), echelle))
}

pub fn acos(x: &Nombre, echelle: AngleScale) -> Result<Nombre, EvalError> {
    let xs = dans_unite(x, "arc cosinus hors de [-1, 1]")?;
    Ok(depuis_radians(pi_scaled(W) / 2u32 - asin_scaled(&xs), echelle))
}

pub fn atan(x: &Nombre, echelle: AngleScale) -> Result<Nombre, EvalError> {
    let xs = dans_unite(x, "arc tangente hors de [-1, 1]")?;
    Ok(depuis_radians(atan_scaled(&xs, W), echelle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> Nombre {
        s.parse().unwrap_or_else(|e| panic!("parse({s:?}) : {e}"))
    }

    /// |a − b| < 10^-chiffres
    fn proche(a: &Nombre, b: &Nombre, chiffres: i64) {
        let d = (a - b).abs();
        assert!(
            d.is_zero() || d.ordre().unwrap_or(0) < -chiffres,
            "{a} ≉ {b} à 1e-{chiffres}"
        );
    }

    #[test]
    fn pi_a_60_chiffres() {
        proche(
            &pi(),
            &n("3.14159265358979323846264338327950288419716939937510582097494"),
            58,
        );
    }

    #[test]
    fn puissances() {
        assert_eq!(puissance(&n("2"), &n("10")).unwrap(), Nombre::from(1024));
        assert_eq!(puissance(&n("2"), &n("-3")).unwrap(), n("0.125"));
        assert_eq!(puissance(&n("-2"), &n("3")).unwrap(), Nombre::from(-8));
        assert_eq!(puissance(&n("0"), &n("0")).unwrap(), Nombre::one());
        proche(&puissance(&n("2"), &n("0.5")).unwrap(), &racine_carree(&n("2")).unwrap(), 55);
        assert!(matches!(puissance(&n("-8"), &n("0.5")), Err(EvalError::Range(_))));
        assert!(matches!(puissance(&n("0"), &n("-1")), Err(EvalError::DivisionByZero)));
        assert!(matches!(puissance(&n("10"), &n("1e16")), Err(EvalError::Range(_))));
        assert_eq!(puissance(&n("10"), &n("-1e16")).unwrap(), Nombre::zero());
        assert_eq!(puissance(&n("1"), &n("1e18")).unwrap(), Nombre::one());
    }

    #[test]
    fn racines() {
        assert_eq!(racine_carree(&n("16")).unwrap(), Nombre::from(4));
        assert_eq!(racine_carree(&n("0.0625")).unwrap(), n("0.25"));
        proche(
            &racine_carree(&n("2")).unwrap(),
            &n("1.41421356237309504880168872420969807856967187537694807317668"),
            58,
        );
        assert!(matches!(racine_carree(&n("-1")), Err(EvalError::Range(_))));

        assert_eq!(racine_cubique(&n("27")), Nombre::from(3));
        assert_eq!(racine_cubique(&n("-8")), Nombre::from(-2));
        assert_eq!(racine_cubique(&n("0.001")), n("0.1"));
    }

    #[test]
    fn racine_indice_a_gauche() {
        // 3 root 8 = 8^(1/3)
        assert_eq!(racine(&n("3"), &n("8")).unwrap(), Nombre::from(2));
        // 8 root 3 = 3^(1/8), pas 2
        proche(
            &racine(&n("8"), &n("3")).unwrap(),
            &n("1.14720269043987708947305861353659737419137992193688045239236"),
            55,
        );
        assert_eq!(racine(&n("2"), &n("9")).unwrap(), Nombre::from(3));
        proche(&racine(&n("4"), &n("16")).unwrap(), &Nombre::from(2), 55);
        assert!(matches!(racine(&n("2"), &n("-4")), Err(EvalError::Range(_))));
        assert!(matches!(racine(&n("3"), &n("-8")), Err(EvalError::Range(_))));
        assert_eq!(racine(&n("1"), &n("-8")).unwrap(), Nombre::from(-8));
        assert!(matches!(racine(&n("0"), &n("8")), Err(EvalError::DivisionByZero)));
    }

    #[test]
    fn exp_ln_log() {
        proche(
            &exp(&Nombre::one()).unwrap(),
            &n("2.71828182845904523536028747135266249775724709369995957496697"),
            57,
        );
        assert_eq!(exp(&Nombre::zero()).unwrap(), Nombre::one());
        proche(&ln(&exp(&n("5")).unwrap()).unwrap(), &n("5"), 55);
        assert_eq!(log10(&n("1000")).unwrap(), Nombre::from(3));
        assert_eq!(log10(&n("0.01")).unwrap(), Nombre::from(-2));
        proche(
            &log10(&n("2")).unwrap(),
            &n("0.301029995663981195213738894724493026768189881462108541310427"),
            58,
        );
        assert!(matches!(ln(&n("0")), Err(EvalError::Range(_))));
        assert!(matches!(log10(&n("-3")), Err(EvalError::Range(_))));
        assert!(matches!(exp(&n("1e20")), Err(EvalError::Range(_))));
        assert_eq!(exp(&n("-1e20")).unwrap(), Nombre::zero());
    }

    #[test]
    fn dix_puissance_et_touche_e() {
        assert_eq!(dix_puissance(&n("3")).unwrap(), Nombre::from(1000));
        assert_eq!(dix_puissance(&n("-2")).unwrap(), n("0.01"));
        proche(&dix_puissance(&n("0.5")).unwrap(), &racine_carree(&n("10")).unwrap(), 55);
        assert_eq!(exposant_dix(&n("2.5"), &n("3")).unwrap(), Nombre::from(2500));
    }

    #[test]
    fn combinatoire() {
        assert_eq!(combinaison(&n("5"), &n("2")).unwrap(), Nombre::from(10));
        assert_eq!(combinaison(&n("52"), &n("5")).unwrap(), Nombre::from(2_598_960));
        assert_eq!(combinaison(&n("5"), &n("7")).unwrap(), Nombre::zero());
        assert_eq!(permutation(&n("5"), &n("2")).unwrap(), Nombre::from(10));
        assert!(matches!(combinaison(&n("4.5"), &n("2")), Err(EvalError::NotInteger)));
        assert!(matches!(permutation(&n("5"), &n("0.5")), Err(EvalError::NotInteger)));
        assert!(matches!(combinaison(&n("-5"), &n("2")), Err(EvalError::Range(_))));
    }

    #[test]
    fn combinatoire_taille_du_resultat() {
        // n énorme, peu de pas : le résultat aurait ~9·10^6 chiffres
        assert!(matches!(combinaison(&n("1e3000"), &n("3000")), Err(EvalError::Range(_))));
        assert!(matches!(permutation(&n("1e3000"), &n("3000")), Err(EvalError::Range(_))));
        assert!(matches!(combinaison(&n("1e100000"), &n("2")), Err(EvalError::Range(_))));

        // n énorme, r petit : raisonnable
        assert_eq!(combinaison(&n("1e3000"), &n("1")).unwrap(), n("1e3000"));
        assert_eq!(combinaison(&n("1e3000"), &n("0")).unwrap(), Nombre::one());
        assert_eq!(combinaison(&n("1e3000"), &n("1e3000")).unwrap(), Nombre::one());
        assert_eq!(combinaison(&n("1e20"), &n("2")).unwrap(), n("4999999999999999999950000000000000000000"));
    }

    #[test]
    fn factorielles() {
        assert_eq!(factorielle(&n("0")).unwrap(), Nombre::one());
        assert_eq!(factorielle(&n("5")).unwrap(), Nombre::from(120));
        assert_eq!(
            factorielle(&n("20")).unwrap(),
            Nombre::from(2_432_902_008_176_640_000)
        );
        assert!(matches!(factorielle(&n("2.5")), Err(EvalError::NotInteger)));
        assert!(matches!(factorielle(&n("-1")), Err(EvalError::Range(_))));
        assert!(matches!(factorielle(&n("1e6")), Err(EvalError::Range(_))));
    }

    #[test]
    fn trigo_degres() {
        let d = AngleScale::Degrees;
        assert_eq!(sin(&n("90"), d).unwrap(), Nombre::one());
        assert_eq!(cos(&n("90"), d).unwrap(), Nombre::zero());
        assert_eq!(sin(&n("180"), d).unwrap(), Nombre::zero());
        assert_eq!(sin(&n("30"), d).unwrap(), n("0.5"));
        assert_eq!(cos(&n("-720"), d).unwrap(), Nombre::one());
        assert_eq!(tan(&n("45"), d).unwrap(), Nombre::one());
        assert!(matches!(tan(&n("90"), d), Err(EvalError::Range(_))));
        // 10^100 ≡ 280 (mod 360)
        assert_eq!(sin(&n("1e100"), d).unwrap(), sin(&n("280"), d).unwrap());
        proche(&sin(&n("-90.5"), d).unwrap(), &sin(&n("269.5"), d).unwrap(), 58);
        assert_eq!(sin(&n("-30"), d).unwrap(), n("-0.5"));
        assert_eq!(sin(&n("-270"), d).unwrap(), Nombre::one());
    }

    #[test]
    fn trigo_degres_angle_minuscule() {
        let d = AngleScale::Degrees;
        assert_eq!(sin(&n("1e-999999999999999"), d).unwrap(), Nombre::zero());
        assert_eq!(sin(&n("-1e-10000000"), d).unwrap(), Nombre::zero());
        assert_eq!(cos(&n("1e-999999999999999"), d).unwrap(), Nombre::one());
        assert_eq!(tan(&n("-1e-999999999999999"), d).unwrap(), Nombre::zero());
    }

    #[test]
    fn trigo_radians() {
        let r = AngleScale::Radians;
        let demi_pi = pi().checked_div(&Nombre::from(2)).unwrap();
        assert_eq!(sin(&demi_pi, r).unwrap(), Nombre::one());
        assert_eq!(sin(&pi(), r).unwrap(), Nombre::zero());
        proche(
            &sin(&n("1"), r).unwrap(),
            &n("0.841470984807896506652502321630298999622563060798371065672751"),
            58,
        );
        proche(
            &cos(&n("1e20"), r).unwrap(),
            &n("0.763970404441728300400146802737881122834473441747004480622189"),
            45,
        );
    }

    #[test]
    fn trigo_inverse() {
        let d = AngleScale::Degrees;
        assert_eq!(asin(&n("1"), d).unwrap(), Nombre::from(90));
        assert_eq!(asin(&n("0.5"), d).unwrap(), Nombre::from(30));
        assert_eq!(acos(&n("1"), d).unwrap(), Nombre::zero());
        assert_eq!(acos(&n("0.5"), d).unwrap(), Nombre::from(60));
        assert_eq!(atan(&n("1"), d).unwrap(), Nombre::from(45));
        assert_eq!(atan(&n("-1"), d).unwrap(), Nombre::from(-45));

        let r = AngleScale::Radians;
        let demi_pi = pi().checked_div(&Nombre::from(2)).unwrap();
        proche(&asin(&n("1"), r).unwrap(), &demi_pi, 58);
        proche(&acos(&n("-1"), r).unwrap(), &pi(), 58);

        assert!(matches!(asin(&n("2"), d), Err(EvalError::Range(_))));
        assert!(matches!(acos(&n("-1.5"), r), Err(EvalError::Range(_))));
        assert!(matches!(atan(&n("1.01"), r), Err(EvalError::Range(_))));
    }
}
