// src/noyau/lecture.rs
//
// Noyaux “scalés” : un entier BigInt X représente x = X / 10^digits.
// Les séries tronquent à chaque terme ; l’appelant travaille avec des
// chiffres de garde puis arrondit (voir fonctions.rs).

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use super::nombre::pow10;

/* ------------------------ π (Machin) + cache ------------------------ */

/// arctan(1/q) en entier scalé (troncature) via série:
/// atan(z) = z - z^3/3 + z^5/5 - ...
fn arctan_inv_q_scaled(q: i64, scale: &BigInt) -> BigInt {
    let q = BigInt::from(q);
    let q2 = &q * &q;

    let mut k: u32 = 0;
    let mut sign_pos = true;

    // q^(2k+1)
    let mut q_pow = q;
    let mut sum = BigInt::zero();

    loop {
        let term = scale / (&q_pow * (2 * k + 1));
        if term.is_zero() {
            break;
        }

        if sign_pos {
            sum += &term;
        } else {
            sum -= &term;
        }

        q_pow *= &q2;
        sign_pos = !sign_pos;
        k += 1;
    }

    sum
}

fn pi_scaled_compute(digits: usize) -> BigInt {
    // extra pour amortir les erreurs de troncature
    let extra = 10usize;
    let scale = pow10(digits + extra);

    // Machin : π = 16*atan(1/5) - 4*atan(1/239)
    let a = arctan_inv_q_scaled(5, &scale);
    let b = arctan_inv_q_scaled(239, &scale);

    (BigInt::from(16) * a - BigInt::from(4) * b) / pow10(extra)
}

fn ln10_scaled_compute(digits: usize) -> BigInt {
    let extra = 5usize;
    let d = digits + extra;
    ln_scaled(&(pow10(d) * 10u32), d) / pow10(extra)
}

static PI_CACHE: OnceLock<Mutex<HashMap<usize, BigInt>>> = OnceLock::new();
static LN10_CACHE: OnceLock<Mutex<HashMap<usize, BigInt>>> = OnceLock::new();

fn en_cache(
    cache: &'static OnceLock<Mutex<HashMap<usize, BigInt>>>,
    digits: usize,
    calcul: fn(usize) -> BigInt,
) -> BigInt {
    let m = cache.get_or_init(|| Mutex::new(HashMap::new()));
    // un panic ailleurs ne rend pas la table fausse : on reprend le verrou
    let mut guard = m.lock().unwrap_or_else(|e| e.into_inner());

    if let Some(v) = guard.get(&digits) {
        return v.clone();
    }

    let v = calcul(digits);
    guard.insert(digits, v.clone());
    v
}

pub fn pi_scaled(digits: usize) -> BigInt {
    en_cache(&PI_CACHE, digits, pi_scaled_compute)
}

pub fn ln10_scaled(digits: usize) -> BigInt {
    en_cache(&LN10_CACHE, digits, ln10_scaled_compute)
}

/* ------------------------ Racine ------------------------ */

/// √x scalé (troncature). x ≥ 0.
pub fn sqrt_scaled(x: &BigInt, digits: usize) -> BigInt {
    (x * pow10(digits)).sqrt()
}

/* ------------------------ exp / ln ------------------------ */

/// e^x scalé pour |x| de l’ordre de l’unité (l’appelant réduit l’argument).
///
/// Moitiés successives (x / 2^10), Taylor, puis 10 élévations au carré.
pub fn exp_scaled(x: &BigInt, digits: usize) -> BigInt {
    const MOITIES: u32 = 10;

    let scale = pow10(digits);
    let r = x / BigInt::from(1u32 << MOITIES);

    let mut somme = scale.clone();
    let mut terme = scale.clone();
    let mut n: u32 = 1;
    loop {
        terme = &terme * &r / &scale / n;
        if terme.is_zero() {
            break;
        }
        somme += &terme;
        n += 1;
    }

    for _ in 0..MOITIES {
        somme = &somme * &somme / &scale;
    }
    somme
}

/// ln(y) scalé pour y > 0 proche de [1, 10].
///
/// Racines carrées jusqu’à |y − 1| ≤ 0.1, puis ln y = 2·atanh((y−1)/(y+1)).
pub fn ln_scaled(y: &BigInt, digits: usize) -> BigInt {
    let scale = pow10(digits);

    let mut y = y.clone();
    let mut racines: u32 = 0;
    while (&y - &scale).abs() * 10u32 > scale {
        y = sqrt_scaled(&y, digits);
        racines += 1;
    }

    let z = (&y - &scale) * &scale / (&y + &scale);
    let z2 = &z * &z / &scale;

    let mut somme = z.clone();
    let mut puissance = z;
    let mut k: u32 = 1;
    loop {
        puissance = &puissance * &z2 / &scale;
        let terme = &puissance / (2 * k + 1);
        if terme.is_zero() {
            break;
        }
        somme += terme;
        k += 1;
    }

    somme * BigInt::from(2u32).pow(racines + 1)
}

/* ------------------------ Trigo ------------------------ */

/// (sin x, cos x) scalés, pour x déjà réduit dans [−π, π].
pub fn sin_cos_scaled(x: &BigInt, digits: usize) -> (BigInt, BigInt) {
    let scale = pow10(digits);
    let x2 = x * x / &scale;

    let mut sin = x.clone();
    let mut terme = x.clone();
    let mut n: u32 = 1;
    loop {
        terme = -(&terme * &x2 / &scale) / ((2 * n) * (2 * n + 1));
        if terme.is_zero() {
            break;
        }
        sin += &terme;
        n += 1;
    }

    let mut cos = scale.clone();
    let mut terme = scale.clone();
    let mut n: u32 = 1;
    loop {
        terme = -(&terme * &x2 / &scale) / ((2 * n - 1) * (2 * n));
        if terme.is_zero() {
            break;
        }
        cos += &terme;
        n += 1;
    }

    (sin, cos)
}

/// atan(x) scalé, x quelconque.
pub fn atan_scaled(x: &BigInt, digits: usize) -> BigInt {
    let scale = pow10(digits);

    if x.is_negative() {
        return -atan_scaled(&-x, digits);
    }
    // atan(x) = π/2 − atan(1/x)
    if *x > scale {
        let inverse = &scale * &scale / x;
        return pi_scaled(digits) / 2u32 - atan_scaled(&inverse, digits);
    }

    // atan(x) = 2·atan(x / (1 + √(1 + x²))) jusqu’à x ≤ 0.01
    let mut x = x.clone();
    let mut moities: u32 = 0;
    while &x * 100u32 > scale {
        let rac = sqrt_scaled(&(&scale + &x * &x / &scale), digits);
        x = &x * &scale / (&scale + rac);
        moities += 1;
    }

    let x2 = &x * &x / &scale;
    let mut somme = x.clone();
    let mut puissance = x;
    let mut k: u32 = 1;
    loop {
        puissance = -(&puissance * &x2 / &scale);
        let terme = &puissance / (2 * k + 1);
        if terme.is_zero() {
            break;
        }
        somme += terme;
        k += 1;
    }

    somme * BigInt::from(2u32).pow(moities)
}
