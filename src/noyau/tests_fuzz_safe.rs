//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - suites de touches bornées (longueur, littéraux de deux chiffres au plus)
//! - budget temps global
//! - toute erreur typée est acceptée : l’invariant est l’absence de panique
//! - invariant clé : affichage réussi => tient dans la largeur demandée

use std::time::{Duration, Instant};

use super::erreur::EvalError;
use super::jetons::AngleScale;
use super::session::Session;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de touches (bornée) ------------------------ */

const CHIFFRES: [&str; 10] = ["#0", "#1", "#2", "#3", "#4", "#5", "#6", "#7", "#8", "#9"];

const TOUCHES: [&str; 34] = [
    "pi", "ANS", "RCL", "+", "-", "*", "/", "E", "^", "C", "P", "root", "(", ")", "(", ")",
    "u+", "u-", "sqrt", "cbrt", "log", "ln", "tenX", "exp", "sin", "cos", "tan", "asin",
    "acos", "atan", "2", "3", "!", "inv",
];

/// Littéral court : “7”, “42”, “.5”, “3.”, “-1” (via #-)…
fn gen_litteral(rng: &mut Rng, fil: &mut Vec<&'static str>) {
    if rng.pick(8) == 0 {
        fil.push("#-");
    }
    let nb = 1 + rng.pick(2) as usize;
    let point = rng.pick(4) == 0;
    for k in 0..nb {
        if point && k == nb - 1 {
            fil.push("#.");
        }
        fil.push(CHIFFRES[rng.pick(10) as usize]);
    }
}

/// Suite de touches “soupe” : littéraux jamais collés entre eux.
fn gen_fil(rng: &mut Rng, max_unites: u32) -> Vec<&'static str> {
    let mut fil = Vec::new();
    let unites = 1 + rng.pick(max_unites);
    let mut precedent_litteral = false;

    for _ in 0..unites {
        if !precedent_litteral && rng.coin() {
            gen_litteral(rng, &mut fil);
            precedent_litteral = true;
        } else {
            fil.push(TOUCHES[rng.pick(TOUCHES.len() as u32) as usize]);
            precedent_litteral = false;
        }
    }

    // touche mémoire de tête de temps en temps
    match rng.pick(10) {
        0 => fil.insert(0, "STO"),
        1 => fil.insert(0, "M+"),
        2 => fil.insert(0, "M-"),
        3 => fil.insert(0, "MCL"),
        _ => {}
    }
    fil
}

/// Suite “sage” : binaire bien formé entre littéraux, fonctions en tête.
fn gen_fil_sage(rng: &mut Rng, termes: u32) -> Vec<&'static str> {
    const BINAIRES: [&str; 5] = ["+", "-", "*", "/", "^"];
    const FONCTIONS: [&str; 6] = ["sin", "cos", "sqrt", "ln", "exp", "atan"];

    let mut fil = Vec::new();
    for k in 0..termes {
        if k > 0 {
            fil.push(BINAIRES[rng.pick(BINAIRES.len() as u32) as usize]);
        }
        if rng.pick(3) == 0 {
            fil.push(FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize]);
        }
        let avant = fil.len();
        gen_litteral(rng, &mut fil);
        // pas de signe de littéral ici : la suite doit rester valide
        if fil[avant] == "#-" {
            fil.remove(avant);
        }
    }
    fil
}

/// Une campagne : (affichage ou erreur) par suite, largeur variable.
fn campagne(seed: u64, tours: usize, max: Duration) -> Vec<Result<String, EvalError>> {
    let t0 = Instant::now();
    let mut rng = Rng::new(seed);
    let mut session = Session::new(AngleScale::Degrees, 24);
    let mut sorties = Vec::with_capacity(tours);

    for _ in 0..tours {
        budget(t0, max);

        let largeur = 6 + rng.pick(55) as usize;
        session.set_largeur(largeur);
        if rng.pick(5) == 0 {
            session.basculer_echelle();
        }

        let fil = gen_fil(&mut rng, 14);
        let sortie = session.calculer(&fil).map(|r| {
            assert!(
                r.affichage.chars().count() <= largeur,
                "fil={fil:?} affichage={:?} largeur={largeur}",
                r.affichage
            );
            r.affichage
        });
        sorties.push(sortie);
    }
    sorties
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_sans_panique_et_largeur() {
    let sorties = campagne(0xC0FFEE_u64, 400, Duration::from_secs(10));

    let ok = sorties.iter().filter(|s| s.is_ok()).count();
    let err = sorties.len() - ok;

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(ok > 10, "trop peu de succès: {ok}");
    assert!(err > 10, "trop peu d’erreurs: {err}");
}

#[test]
fn fuzz_safe_determinisme() {
    let max = Duration::from_secs(10);
    let a = campagne(0xBADC0DE_u64, 150, max);
    let b = campagne(0xBADC0DE_u64, 150, max);
    assert_eq!(a, b);
}

#[test]
fn fuzz_safe_suites_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0x5EED_u64);
    let mut session = Session::default();

    for _ in 0..200 {
        budget(t0, max);

        let termes = 1 + rng.pick(6);
        let fil = gen_fil_sage(&mut rng, termes);
        match session.calculer(&fil) {
            Ok(r) => assert!(r.affichage.chars().count() <= session.largeur()),
            // domaine : division par zéro, ln(0), dépassement…
            Err(e) => assert!(
                !matches!(e, EvalError::Parenthesis | EvalError::Malformed(_)),
                "fil={fil:?} err={e}"
            ),
        }
    }
}

#[test]
fn fuzz_safe_ans_reproduit_l_affichage() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xA115_u64);
    let mut session = Session::default();

    for _ in 0..100 {
        budget(t0, max);

        let fil = gen_fil_sage(&mut rng, 3);
        if let Ok(r) = session.calculer(&fil) {
            let rappel = session
                .calculer(&["ANS"])
                .unwrap_or_else(|e| panic!("ANS après {fil:?} : {e}"));
            assert_eq!(rappel.affichage, r.affichage, "fil={fil:?}");
        }
    }
}
