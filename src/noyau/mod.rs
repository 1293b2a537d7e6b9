//! Noyau : moteur d’évaluation de la calculatrice
//!
//! Organisation interne :
//! - operation.rs : symboles -> Operation (table immuable)
//! - moteur.rs    : accumulateur + opération binaire en attente
//! - format.rs    : rendu des opérandes (description) et du résultat (écran)

pub mod format;
pub mod moteur;
pub mod operation;

#[cfg(test)]
mod tests_moteur;


// API publique minimale
pub use format::format_resultat;
pub use moteur::Moteur;
