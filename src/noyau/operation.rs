// src/noyau/operation.rs
//
// Table des opérations (symbole -> comportement)
// ----------------------------------------------
// - Construite une seule fois (TableOperations::new), immuable ensuite.
// - Les fonctions sont des pointeurs `fn` : pas de capture, Copy, comparables au test.

use std::collections::HashMap;

/// Comportement lié à un symbole du pavé.
#[derive(Clone, Copy, Debug)]
pub enum Operation {
    /// Valeur fixe (π, ℯ) : remplace l’accumulateur ET la description.
    Constante(f64),
    /// Transforme la valeur courante sur place.
    Unaire(fn(f64) -> f64),
    /// Combine un premier opérande en attente avec le suivant.
    Binaire(fn(f64, f64) -> f64),
    /// Résout l’opération binaire en attente.
    Egal,
    /// Remise à (0, "").
    Efface,
}

/// Ordre stable des symboles (sert aussi au pavé).
const SYMBOLES: [&str; 18] = [
    "π", "ℯ", "√", "cos", "sin", "tan", "cosh", "sinh", "tanh", "x²", "x⁻¹", "±", "×", "÷", "+",
    "−", "=", "C",
];

fn operation_du_symbole(symbole: &str) -> Option<Operation> {
    let op = match symbole {
        "π" => Operation::Constante(std::f64::consts::PI),
        "ℯ" => Operation::Constante(std::f64::consts::E),
        "√" => Operation::Unaire(f64::sqrt),
        "cos" => Operation::Unaire(f64::cos),
        "sin" => Operation::Unaire(f64::sin),
        "tan" => Operation::Unaire(f64::tan),
        "cosh" => Operation::Unaire(f64::cosh),
        "sinh" => Operation::Unaire(f64::sinh),
        "tanh" => Operation::Unaire(f64::tanh),
        "x²" => Operation::Unaire(|x| x * x),
        "x⁻¹" => Operation::Unaire(|x| 1.0 / x),
        "±" => Operation::Unaire(|x| -x),
        "×" => Operation::Binaire(|a, b| a * b),
        "÷" => Operation::Binaire(|a, b| a / b),
        "+" => Operation::Binaire(|a, b| a + b),
        "−" => Operation::Binaire(|a, b| a - b),
        "=" => Operation::Egal,
        "C" => Operation::Efface,
        _ => return None,
    };
    Some(op)
}

#[derive(Clone, Debug)]
pub struct TableOperations {
    ops: HashMap<&'static str, Operation>,
}

impl Default for TableOperations {
    fn default() -> Self {
        Self::new()
    }
}

impl TableOperations {
    pub fn new() -> Self {
        let ops = SYMBOLES
            .iter()
            .filter_map(|&s| operation_du_symbole(s).map(|op| (s, op)))
            .collect();
        Self { ops }
    }

    /// None si le symbole est inconnu (l’appelant l’ignore).
    pub fn get(&self, symbole: &str) -> Option<Operation> {
        self.ops.get(symbole).copied()
    }

    pub fn symboles(&self) -> impl Iterator<Item = &'static str> + '_ {
        SYMBOLES.iter().copied().filter(|s| self.ops.contains_key(s))
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
