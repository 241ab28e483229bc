// src/noyau/nombre.rs
//
// Décimal flottant à précision arbitraire
// ---------------------------------------
// valeur = mantisse × 10^exposant
// - mantisse arrondie à PRECISION chiffres significatifs (demi loin de zéro)
// - zéros finaux retirés : une seule écriture par valeur, donc l’égalité
//   dérivée est l’égalité numérique
// - zéro s’écrit (0, 0)

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::EvalError;

/// Chiffres significatifs conservés (précision de travail ≥ 50).
pub const PRECISION: usize = 60;

/// Borne des exposants décimaux : au-delà, dépassement de capacité.
pub const EXPOSANT_MAX: i64 = 1_000_000_000_000_000;

/// Au-delà, `to_bigint` refuse (entier de plus de 100 000 chiffres).
const EXPOSANT_ENTIER_MAX: i64 = 100_000;

/// 10^n. Les appelants bornent n ; au-delà de u32::MAX, saturation (jamais
/// de troncature).
pub(crate) fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(u32::try_from(n).unwrap_or(u32::MAX))
}

pub(crate) fn nb_chiffres(m: &BigInt) -> usize {
    m.magnitude().to_string().len()
}

/// a / b arrondi au plus proche (demi loin de zéro). b > 0.
pub(crate) fn arrondi_div(a: &BigInt, b: &BigInt) -> BigInt {
    let q = a / b;
    let r = a - &q * b;
    if r.abs() * 2u32 >= *b {
        if a.is_negative() {
            q - BigInt::one()
        } else {
            q + BigInt::one()
        }
    } else {
        q
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Nombre {
    mantisse: BigInt,
    exposant: i64,
}

fn normalise(mut mantisse: BigInt, mut exposant: i64) -> Nombre {
    if mantisse.is_zero() {
        return Nombre::zero();
    }

    let n = nb_chiffres(&mantisse);
    if n > PRECISION {
        let k = n - PRECISION;
        mantisse = arrondi_div(&mantisse, &pow10(k));
        exposant = exposant.saturating_add(k as i64);
    }

    let texte = mantisse.magnitude().to_string();
    let zeros = texte.len() - texte.trim_end_matches('0').len();
    if zeros > 0 {
        mantisse /= pow10(zeros);
        exposant = exposant.saturating_add(zeros as i64);
    }

    Nombre { mantisse, exposant }
}

impl Nombre {
    pub fn zero() -> Self {
        Nombre {
            mantisse: BigInt::zero(),
            exposant: 0,
        }
    }

    pub fn one() -> Self {
        Nombre {
            mantisse: BigInt::one(),
            exposant: 0,
        }
    }

    pub fn from_parts(mantisse: BigInt, exposant: i64) -> Self {
        normalise(mantisse, exposant)
    }

    /// 10^n exact.
    pub fn pow10(n: i64) -> Self {
        Nombre {
            mantisse: BigInt::one(),
            exposant: n,
        }
    }

    /// Entier “scalé” (x × 10^digits) -> Nombre.
    pub fn from_scaled(x: BigInt, digits: usize) -> Self {
        normalise(x, -(digits as i64))
    }

    /// Nombre -> entier “scalé” arrondi : round(x × 10^digits).
    ///
    /// L’appelant borne l’ordre de grandeur avant d’appeler (pas de garde ici
    /// pour les très grands nombres).
    pub fn to_scaled(&self, digits: usize) -> BigInt {
        let decalage = self.exposant.saturating_add(digits as i64);
        if decalage >= 0 {
            return &self.mantisse * pow10(decalage as usize);
        }
        let k = decalage.unsigned_abs() as usize;
        if k > nb_chiffres(&self.mantisse) + 1 {
            return BigInt::zero();
        }
        arrondi_div(&self.mantisse, &pow10(k))
    }

    pub fn mantisse(&self) -> &BigInt {
        &self.mantisse
    }

    pub fn exposant(&self) -> i64 {
        self.exposant
    }

    pub fn is_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantisse.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.mantisse.is_positive()
    }

    pub fn abs(&self) -> Self {
        Nombre {
            mantisse: self.mantisse.abs(),
            exposant: self.exposant,
        }
    }

    pub fn is_integer(&self) -> bool {
        self.exposant >= 0
    }

    /// Ordre décimal du premier chiffre : x = d.ddd × 10^ordre. None pour zéro.
    pub fn ordre(&self) -> Option<i64> {
        if self.is_zero() {
            return None;
        }
        Some(
            self.exposant
                .saturating_add(nb_chiffres(&self.mantisse) as i64 - 1),
        )
    }

    /// x × 10^k (exact).
    pub fn decaler(&self, k: i64) -> Self {
        if self.is_zero() {
            return Nombre::zero();
        }
        Nombre {
            mantisse: self.mantisse.clone(),
            exposant: self.exposant.saturating_add(k),
        }
    }

    pub fn to_bigint(&self) -> Option<BigInt> {
        if !self.is_integer() || self.exposant > EXPOSANT_ENTIER_MAX {
            return None;
        }
        Some(&self.mantisse * pow10(self.exposant as usize))
    }

    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() || self.ordre().unwrap_or(0) > 18 {
            return None;
        }
        self.to_bigint()?.to_i64()
    }

    pub fn checked_div(&self, diviseur: &Nombre) -> Option<Nombre> {
        if diviseur.is_zero() {
            return None;
        }
        if self.is_zero() {
            return Some(Nombre::zero());
        }
        let k = (PRECISION + 5 + nb_chiffres(&diviseur.mantisse))
            .saturating_sub(nb_chiffres(&self.mantisse));
        let q = arrondi_div(&(&self.mantisse * pow10(k)), &diviseur.mantisse.abs());
        let q = if diviseur.is_negative() { -q } else { q };
        let exposant = self
            .exposant
            .saturating_sub(diviseur.exposant)
            .saturating_sub(k as i64);
        Some(normalise(q, exposant))
    }

    pub fn inverse(&self) -> Option<Nombre> {
        Nombre::one().checked_div(self)
    }

    /// `n` chiffres significatifs de |x| (arrondis, complétés par des zéros)
    /// et l’ordre décimal du premier chiffre après arrondi.
    pub fn chiffres(&self, n: usize) -> (String, i64) {
        let n = n.max(1);
        if self.is_zero() {
            return ("0".repeat(n), 0);
        }

        let mut m = self.mantisse.abs();
        let nd = nb_chiffres(&m);
        let mut ordre = self.exposant.saturating_add(nd as i64 - 1);

        if nd > n {
            m = arrondi_div(&m, &pow10(nd - n));
            // 9.99… -> 10.0… : un chiffre de trop
            if nb_chiffres(&m) > n {
                m /= BigInt::from(10);
                ordre += 1;
            }
        }

        let mut s = m.to_string();
        while s.len() < n {
            s.push('0');
        }
        (s, ordre)
    }
}

impl Default for Nombre {
    fn default() -> Self {
        Nombre::zero()
    }
}

impl From<i64> for Nombre {
    fn from(n: i64) -> Self {
        normalise(BigInt::from(n), 0)
    }
}

impl From<BigInt> for Nombre {
    fn from(n: BigInt) -> Self {
        normalise(n, 0)
    }
}

/* ------------------------ Arithmétique ------------------------ */

impl Add for &Nombre {
    type Output = Nombre;

    fn add(self, autre: &Nombre) -> Nombre {
        if self.is_zero() {
            return autre.clone();
        }
        if autre.is_zero() {
            return self.clone();
        }

        // ordres trop éloignés : le petit terme disparaît dans l’arrondi
        let (oa, ob) = (self.ordre().unwrap_or(0), autre.ordre().unwrap_or(0));
        let marge = PRECISION as i64 + 2;
        if oa.saturating_sub(ob) > marge {
            return self.clone();
        }
        if ob.saturating_sub(oa) > marge {
            return autre.clone();
        }

        let e = self.exposant.min(autre.exposant);
        let ma = &self.mantisse * pow10((self.exposant - e) as usize);
        let mb = &autre.mantisse * pow10((autre.exposant - e) as usize);
        normalise(ma + mb, e)
    }
}

impl Sub for &Nombre {
    type Output = Nombre;

    fn sub(self, autre: &Nombre) -> Nombre {
        self + &(-autre)
    }
}

impl Mul for &Nombre {
    type Output = Nombre;

    fn mul(self, autre: &Nombre) -> Nombre {
        normalise(
            &self.mantisse * &autre.mantisse,
            self.exposant.saturating_add(autre.exposant),
        )
    }
}

impl Neg for &Nombre {
    type Output = Nombre;

    fn neg(self) -> Nombre {
        Nombre {
            mantisse: -&self.mantisse,
            exposant: self.exposant,
        }
    }
}

impl Neg for Nombre {
    type Output = Nombre;

    fn neg(self) -> Nombre {
        Nombre {
            mantisse: -self.mantisse,
            exposant: self.exposant,
        }
    }
}

impl Ord for Nombre {
    fn cmp(&self, autre: &Self) -> Ordering {
        let d = self - autre;
        if d.is_zero() {
            Ordering::Equal
        } else if d.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl PartialOrd for Nombre {
    fn partial_cmp(&self, autre: &Self) -> Option<Ordering> {
        Some(self.cmp(autre))
    }
}

/* ------------------------ Littéraux ------------------------ */

/// Littéral de calculatrice : `[-]chiffres[.chiffres][e[-]chiffres]`.
/// Au moins un chiffre avant l’exposant, un seul point décimal.
impl FromStr for Nombre {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mal_forme = || EvalError::Parse(s.to_string());

        let (corps, exposant_txt) = match s.split_once('e') {
            Some((c, e)) => (c, Some(e)),
            None => (s, None),
        };
        let (negatif, corps) = match corps.strip_prefix('-') {
            Some(reste) => (true, reste),
            None => (false, corps),
        };
        let (entier, frac) = corps.split_once('.').unwrap_or((corps, ""));

        let tout_chiffres = |t: &str| t.chars().all(|c| c.is_ascii_digit());
        if (entier.is_empty() && frac.is_empty()) || !tout_chiffres(entier) || !tout_chiffres(frac)
        {
            return Err(mal_forme());
        }

        let texte = format!("{entier}{frac}");
        let mantisse = BigInt::parse_bytes(texte.as_bytes(), 10).ok_or_else(mal_forme)?;
        let mut exposant = -(frac.len() as i64);

        if let Some(e) = exposant_txt {
            let (neg_e, e) = match e.strip_prefix('-') {
                Some(reste) => (true, reste),
                None => (false, e),
            };
            if e.is_empty() || !tout_chiffres(e) {
                return Err(mal_forme());
            }
            let v: i64 = e
                .parse()
                .map_err(|_| EvalError::Range("exposant trop grand"))?;
            if v > EXPOSANT_MAX {
                return Err(EvalError::Range("exposant trop grand"));
            }
            exposant += if neg_e { -v } else { v };
        }

        let mantisse = if negatif { -mantisse } else { mantisse };
        Ok(normalise(mantisse, exposant))
    }
}

impl fmt::Display for Nombre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let signe = if self.is_negative() { "-" } else { "" };
        let chiffres = self.mantisse.magnitude().to_string();
        let n = chiffres.len() as i64;
        let e = self.exposant;
        let ordre = e + n - 1;

        if e >= 0 && ordre < 40 {
            return write!(f, "{signe}{chiffres}{}", "0".repeat(e as usize));
        }
        if e < 0 && ordre >= -20 {
            let point = n + e;
            return if point > 0 {
                let (a, b) = chiffres.split_at(point as usize);
                write!(f, "{signe}{a}.{b}")
            } else {
                write!(f, "{signe}0.{}{chiffres}", "0".repeat((-point) as usize))
            };
        }

        let (tete, reste) = chiffres.split_at(1);
        if reste.is_empty() {
            write!(f, "{signe}{tete}e{ordre}")
        } else {
            write!(f, "{signe}{tete}.{reste}e{ordre}")
        }
    }
}
