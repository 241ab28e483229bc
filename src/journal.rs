//! Journal (tracing-subscriber), version native uniquement.
//!
//! Appeler [`init`] une fois au démarrage, avant d’ouvrir la fenêtre.

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum JournalError {
    #[error("niveau de journal invalide : {0}")]
    Niveau(String),

    #[error("abonné de journal déjà installé : {0}")]
    Abonne(String),
}

/// Installe l’abonné global (sortie stderr).
///
/// `RUST_LOG` prime ; `niveau` (“error”, “warn”, “info”, “debug”, “trace”)
/// sert de repli et doit être valide même si `RUST_LOG` est posé.
pub fn init(niveau: &str) -> Result<(), JournalError> {
    let repli = parse_niveau(niveau)?;
    let filtre = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(repli.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| JournalError::Abonne(e.to_string()))
}

/// Niveau de repli de [`init`].
pub fn parse_niveau(niveau: &str) -> Result<LevelFilter, JournalError> {
    if niveau.is_empty() {
        return Err(JournalError::Niveau("niveau vide".into()));
    }
    niveau
        .parse::<LevelFilter>()
        .map_err(|_| JournalError::Niveau(format!("'{niveau}' non reconnu")))
}
