//! Moteur d’évaluation (accumulateur + opération binaire en attente)
//!
//! Contrats :
//! - Aucune erreur remontée : symbole inconnu, opérande manquant => no-op.
//! - Domaine mathématique : IEEE-754 (÷0 => inf, √-1 => NaN), jamais de panique.
//! - Enchaînement strict gauche -> droite, sans priorité : 2 + 3 × 4 = 20.
//! - La description ne rétrécit jamais, sauf via "C" (et une constante, qui la remplace).

use super::format::format_operande;
use super::operation::{Operation, TableOperations};

/// Opération binaire saisie, en attente de son second opérande.
#[derive(Clone, Copy, Debug)]
struct OperationEnAttente {
    fonction: fn(f64, f64) -> f64,
    premier_operande: f64,
}

impl OperationEnAttente {
    fn effectuer(&self, second_operande: f64) -> f64 {
        (self.fonction)(self.premier_operande, second_operande)
    }
}

#[derive(Clone, Debug, Default)]
struct Accumulateur {
    valeur: Option<f64>,
    description: String,
}

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    accumulateur: Accumulateur,
    en_attente: Option<OperationEnAttente>,
    operations: TableOperations,
}

impl Moteur {
    /// État initial : valeur absente, description vide, rien en attente.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_operand(&mut self, operande: f64) {
        self.accumulateur.valeur = Some(operande);
        self.accumulateur.description.push(' ');
        self.accumulateur
            .description
            .push_str(&format_operande(operande));
        self.accumulateur.description.push(' ');
    }

    pub fn perform_operation(&mut self, symbole: &str) {
        let Some(operation) = self.operations.get(symbole) else {
            tracing::trace!(symbole, "symbole inconnu ignoré");
            return;
        };

        match operation {
            Operation::Constante(valeur) => {
                self.accumulateur = Accumulateur {
                    valeur: Some(valeur),
                    description: format!("{symbole} "),
                };
            }
            Operation::Unaire(fonction) => match self.accumulateur.valeur {
                Some(x) => {
                    self.accumulateur.valeur = Some(fonction(x));
                    self.ajoute_symbole(symbole);
                }
                None => tracing::trace!(symbole, "opération unaire sans opérande"),
            },
            Operation::Binaire(fonction) => {
                if self.en_attente.is_some() {
                    self.resout_en_attente();
                }
                if let Some(premier_operande) = self.accumulateur.valeur.take() {
                    self.en_attente = Some(OperationEnAttente {
                        fonction,
                        premier_operande,
                    });
                    self.ajoute_symbole(symbole);
                }
            }
            Operation::Egal => self.resout_en_attente(),
            Operation::Efface => {
                self.accumulateur = Accumulateur {
                    valeur: Some(0.0),
                    description: String::new(),
                };
                self.en_attente = None;
            }
        }

        tracing::debug!(
            symbole,
            valeur = ?self.accumulateur.valeur,
            en_attente = self.en_attente.is_some(),
            description = %self.accumulateur.description,
            "opération"
        );
    }

    /// Applique l’opération en attente à la valeur courante (si les deux existent).
    fn resout_en_attente(&mut self) {
        if let (Some(attente), Some(second)) = (self.en_attente, self.accumulateur.valeur) {
            self.accumulateur.valeur = Some(attente.effectuer(second));
            self.en_attente = None;
        }
    }

    fn ajoute_symbole(&mut self, symbole: &str) {
        self.accumulateur.description.push_str(symbole);
        self.accumulateur.description.push(' ');
    }

    pub fn result_is_pending(&self) -> bool {
        self.en_attente.is_some()
    }

    pub fn result(&self) -> Option<f64> {
        self.accumulateur.valeur
    }

    pub fn description(&self) -> &str {
        &self.accumulateur.description
    }

    /// Symboles reconnus, dans l’ordre du pavé.
    pub fn symboles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operations.symboles()
    }
}
