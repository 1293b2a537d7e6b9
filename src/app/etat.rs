//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : relier le pavé au moteur. Les chiffres s’accumulent dans `saisie`,
//! une touche d’opération pousse la saisie dans le moteur puis déclenche le symbole.
//!
//! Contrats :
//! - Aucune évaluation ici : tout calcul passe par `Moteur`.
//! - Saisie illisible => ignorée (journalisée), jamais d’erreur à l’écran.
//! - Défense en profondeur : saisie bornée (SAISIE_MAX).

use calculatrice_scientifique::noyau::{format_resultat, Moteur};

/// Garde-fou : longueur max de la saisie en cours.
pub const SAISIE_MAX: usize = 32;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    moteur: Moteur,
    // Chiffres en cours de frappe (None = pas de frappe en cours).
    saisie: Option<String>,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Chiffre ou point décimal.
    pub fn touche_chiffre(&mut self, chiffre: &str) {
        let saisie = self.saisie.get_or_insert_with(String::new);

        if saisie.chars().count() >= SAISIE_MAX {
            return;
        }

        if chiffre == "." {
            if saisie.contains('.') {
                return;
            }
            if saisie.is_empty() {
                saisie.push('0');
            }
        }
        saisie.push_str(chiffre);
    }

    /// Symbole du pavé (π, √, +, =, C, …).
    pub fn touche_operation(&mut self, symbole: &str) {
        if let Some(saisie) = self.saisie.take() {
            match saisie.parse::<f64>() {
                Ok(x) => self.moteur.set_operand(x),
                Err(e) => tracing::warn!(%saisie, error = %e, "saisie ignorée"),
            }
        }
        self.moteur.perform_operation(symbole);
    }

    /* ------------------------ Lecture (pour vue.rs) ------------------------ */

    /// Écran principal : la saisie en cours, sinon le résultat du moteur.
    pub fn affichage(&self) -> String {
        match &self.saisie {
            Some(s) => s.clone(),
            None => format_resultat(self.moteur.result()),
        }
    }

    /// Trace : description + " …" (attente) ou " =" (résolu).
    pub fn trace(&self) -> String {
        let d = self.moteur.description();
        if self.moteur.result_is_pending() {
            format!("{d} …")
        } else if d.is_empty() {
            String::new()
        } else {
            format!("{d} =")
        }
    }

    pub fn en_saisie(&self) -> bool {
        self.saisie.is_some()
    }

    pub fn symboles(&self) -> Vec<&'static str> {
        self.moteur.symboles().collect()
    }
}
