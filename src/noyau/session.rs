// src/noyau/session.rs
//
// Registres de la calculatrice
// ----------------------------
// mémoire + réponse : seul état qui survit entre deux calculs.
// Mis à jour uniquement après un calcul réussi.

use tracing::debug;

use super::erreur::EvalError;
use super::eval::{evaluate_width, split_memory_op, LARGEUR_AFFICHAGE};
use super::jetons::{assemble_report, split_identifiers, AngleScale, MemoryOp};
use super::nombre::Nombre;

/// Résultat d’un calcul de session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resultat {
    pub valeur: Nombre,
    pub affichage: String,
    /// Touche mémoire appliquée après le calcul, s’il y en avait une.
    pub memoire: Option<MemoryOp>,
    /// Identifiants inconnus ignorés à l’assemblage.
    pub ignores: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct Session {
    memoire: Nombre,
    reponse: Nombre,
    echelle: AngleScale,
    largeur: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            memoire: Nombre::zero(),
            reponse: Nombre::zero(),
            echelle: AngleScale::default(),
            largeur: LARGEUR_AFFICHAGE,
        }
    }
}

impl Session {
    pub fn new(echelle: AngleScale, largeur: usize) -> Self {
        Self {
            echelle,
            largeur,
            ..Self::default()
        }
    }

    pub fn memoire(&self) -> &Nombre {
        &self.memoire
    }

    pub fn reponse(&self) -> &Nombre {
        &self.reponse
    }

    pub fn echelle(&self) -> AngleScale {
        self.echelle
    }

    pub fn largeur(&self) -> usize {
        self.largeur
    }

    pub fn set_echelle(&mut self, echelle: AngleScale) {
        self.echelle = echelle;
    }

    pub fn basculer_echelle(&mut self) {
        self.echelle = self.echelle.basculer();
    }

    pub fn set_largeur(&mut self, largeur: usize) {
        self.largeur = largeur;
    }

    /// Touche MCL seule.
    pub fn effacer_memoire(&mut self) {
        self.memoire = Nombre::zero();
    }

    /// Étiquette d’état : “M” si la mémoire est non nulle, puis l’unité d’angle.
    pub fn indicateur(&self) -> String {
        let m = if self.memoire.is_zero() { " " } else { "M" };
        format!("{m} {}", self.echelle.nom())
    }

    /// Identifiants de touches -> résultat ; registres mis à jour si succès.
    pub fn calculer<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<Resultat, EvalError> {
        let assemblage = assemble_report(ids, &self.memoire, &self.reponse);
        let (op, jetons) = split_memory_op(assemblage.jetons);

        let (valeur, affichage) = match evaluate_width(jetons, self.echelle, self.largeur) {
            Ok(r) => r,
            Err(e) => {
                debug!(erreur = %e, "calcul refusé, registres inchangés");
                return Err(e);
            }
        };

        self.reponse = valeur.clone();
        match op {
            Some(MemoryOp::Store) => self.memoire = valeur.clone(),
            Some(MemoryOp::AddToMemory) => self.memoire = &self.memoire + &valeur,
            Some(MemoryOp::SubtractFromMemory) => self.memoire = &self.memoire - &valeur,
            Some(MemoryOp::ClearMemory) => self.memoire = Nombre::zero(),
            None => {}
        }

        Ok(Resultat {
            valeur,
            affichage,
            memoire: op,
            ignores: assemblage.ignores,
        })
    }

    /// Forme “fil” : “STO;#2;+;#3;”.
    pub fn calculer_fil(&mut self, fil: &str) -> Result<Resultat, EvalError> {
        self.calculer(&split_identifiers(fil))
    }
}
