//! Calculatrice scientifique — bibliothèque
//!
//! Le noyau (moteur d’évaluation) est exposé seul : aucune dépendance UI ici.
//! Le pavé egui vit dans le binaire (src/app/).

pub mod noyau;
