//! Calculatrice scientifique : noyau décimal (jetons, cascade, affichage)
//! et interface egui (natif + web).

pub mod app;
pub mod noyau;

#[cfg(not(target_arch = "wasm32"))]
pub mod journal;
