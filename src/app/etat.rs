//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : touches saisies (identifiants du pavé), session du noyau
//! (mémoire, réponse, unité d’angle, largeur) et dernier affichage.
//!
//! Contrats :
//! - La vue n’évalue rien : elle appelle `evaluer` / `touche_memoire`.
//! - Registres modifiés seulement par un calcul réussi (voir Session).
//! - Largeur d’affichage bornée.

use crate::noyau::{format_with_minus, libelle, EvalError, Session};

/// Largeur d’affichage par défaut (caractères).
pub const LARGEUR_DEFAUT: usize = 24;

/// Garde-fous : en dessous rien de lisible, au-dessus la précision de travail.
pub const LARGEUR_MIN: usize = 6;
pub const LARGEUR_MAX: usize = 60;

/// Signe moins typographique de l’écran.
const MOINS: char = '−';

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée : identifiants du pavé (“#1”, “sin”, “ANS”…) ---
    pub entree: Vec<&'static str>,

    // --- sorties ---
    pub affichage: String,    // résultat mis en forme
    pub calcul: String,       // entrée du dernier calcul (libellés)
    pub erreur: String,       // détail de l’erreur du dernier calcul
    pub ignores: Vec<String>, // identifiants inconnus du dernier calcul

    // --- registres + paramètres ---
    pub session: Session,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: Vec::new(),
            affichage: "0.0".to_string(),
            calcul: String::new(),
            erreur: String::new(),
            ignores: Vec::new(),
            session: Self::session_neuve(LARGEUR_DEFAUT),
        }
    }
}

impl AppCalc {
    fn session_neuve(largeur: usize) -> Session {
        let mut s = Session::default();
        s.set_largeur(largeur);
        s
    }

    /* ------------------------ Actions “touches” ------------------------ */

    pub fn appuyer(&mut self, id: &'static str) {
        self.entree.push(id);
    }

    /// DEL : retire la dernière touche (un jeton entier : “sin”, “ANS”…).
    pub fn backspace(&mut self) {
        self.entree.pop();
    }

    /// C : efface seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
    }

    /// AC : remise à zéro totale (registres compris, largeur conservée).
    pub fn reset_total(&mut self) {
        let largeur = self.session.largeur();
        *self = Self {
            session: Self::session_neuve(largeur),
            ..Self::default()
        };
    }

    /// MCL : efface la mémoire sans calcul.
    pub fn effacer_memoire(&mut self) {
        self.session.effacer_memoire();
    }

    pub fn basculer_echelle(&mut self) {
        self.session.basculer_echelle();
    }

    pub fn set_largeur(&mut self, largeur: usize) {
        self.session
            .set_largeur(largeur.clamp(LARGEUR_MIN, LARGEUR_MAX));
    }

    /* ------------------------ Calcul ------------------------ */

    /// `=` : évalue l’entrée courante.
    pub fn evaluer(&mut self) {
        let ids = self.entree.clone();
        self.calculer(ids);
    }

    /// STO / M+ / M− : évalue l’entrée précédée de la touche mémoire.
    pub fn touche_memoire(&mut self, id: &'static str) {
        let mut ids = Vec::with_capacity(self.entree.len() + 1);
        ids.push(id);
        ids.extend_from_slice(&self.entree);
        self.calculer(ids);
    }

    fn calculer(&mut self, ids: Vec<&'static str>) {
        if self.entree.is_empty() {
            return;
        }
        self.calcul = self.texte_entree();

        match self.session.calculer(&ids) {
            Ok(r) => {
                // même budget que le noyau, signe typographique
                self.affichage = format_with_minus(&r.valeur, self.session.largeur(), MOINS)
                    .unwrap_or(r.affichage);
                self.erreur.clear();
                self.ignores = r.ignores;
                self.entree.clear();
            }
            Err(e) => self.set_erreur(&e),
        }
    }

    fn set_erreur(&mut self, e: &EvalError) {
        self.affichage = "Erreur".to_string();
        self.erreur = e.to_string();
        self.ignores.clear();
    }

    /* ------------------------ Lecture ------------------------ */

    /// Ligne d’entrée lisible : libellés des touches.
    pub fn texte_entree(&self) -> String {
        self.entree
            .iter()
            .map(|id| libelle(id).unwrap_or(*id))
            .collect()
    }

    /// “M radians”, “  degrés”…
    pub fn indicateur(&self) -> String {
        self.session.indicateur()
    }
}

/// Clavier physique -> identifiant du pavé (chiffres et opérateurs seulement).
pub fn touche_clavier(c: char) -> Option<&'static str> {
    let id = match c {
        '0' => "#0",
        '1' => "#1",
        '2' => "#2",
        '3' => "#3",
        '4' => "#4",
        '5' => "#5",
        '6' => "#6",
        '7' => "#7",
        '8' => "#8",
        '9' => "#9",
        '.' | ',' => "#.",
        '+' => "+",
        '-' => "-",
        '*' => "*",
        '/' => "/",
        '^' => "^",
        '(' => "(",
        ')' => ")",
        '!' => "!",
        _ => return None,
    };
    Some(id)
}
