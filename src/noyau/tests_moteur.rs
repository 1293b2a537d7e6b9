//! Tests de scénarios : séquences de touches -> (résultat, description, attente).

use std::f64::consts::PI;

use super::Moteur;

/// Joue une séquence : nombre => set_operand, sinon perform_operation.
fn joue(touches: &[&str]) -> Moteur {
    let mut m = Moteur::new();
    for t in touches {
        match t.parse::<f64>() {
            Ok(x) => m.set_operand(x),
            Err(_) => m.perform_operation(t),
        }
    }
    m
}

fn assert_etat(m: &Moteur, valeur: Option<f64>, description: &str, attente: bool) {
    assert_eq!(m.result(), valeur, "description={:?}", m.description());
    assert_eq!(m.description(), description);
    assert_eq!(m.result_is_pending(), attente);
}

/* ------------------------ État initial ------------------------ */

#[test]
fn initial() {
    assert_etat(&Moteur::new(), None, "", false);
}

#[test]
fn operande_seul() {
    assert_etat(&joue(&["2"]), Some(2.0), " 2.0 ", false);
    assert_etat(&joue(&["2", "7.5"]), Some(7.5), " 2.0  7.5 ", false);
}

/* ------------------------ Binaires ------------------------ */

#[test]
fn addition_simple() {
    let m = joue(&["2", "+", "3", "="]);
    assert_etat(&m, Some(5.0), " 2.0 +  3.0 ", false);
}

#[test]
fn enchainement_gauche_droite() {
    let m = joue(&["2", "+", "3", "+", "4", "="]);
    assert_etat(&m, Some(9.0), " 2.0 +  3.0 +  4.0 ", false);

    // Pas de priorité : (2 + 3) × 4
    let m = joue(&["2", "+", "3", "×", "4", "="]);
    assert_eq!(m.result(), Some(20.0));
}

#[test]
fn binaire_resout_avant_de_stocker() {
    let m = joue(&["2", "+", "3", "×"]);
    assert_etat(&m, None, " 2.0 +  3.0 × ", true);
}

#[test]
fn binaire_sans_operande() {
    let m = joue(&["+"]);
    assert_etat(&m, None, "", false);
}

#[test]
fn deux_binaires_de_suite() {
    // Le second binaire ne trouve pas de valeur : l’attente initiale reste.
    let m = joue(&["2", "+", "×"]);
    assert_etat(&m, None, " 2.0 + ", true);

    let mut m = m;
    m.set_operand(3.0);
    m.perform_operation("=");
    assert_eq!(m.result(), Some(5.0));
}

#[test]
fn egal_sans_second_operande() {
    let m = joue(&["2", "+", "="]);
    assert_etat(&m, None, " 2.0 + ", true);
}

#[test]
fn soustraction_division_unicode() {
    assert_eq!(joue(&["9", "−", "4", "="]).result(), Some(5.0));
    assert_eq!(joue(&["9", "÷", "4", "="]).result(), Some(2.25));
    // "-" ASCII : symbole inconnu
    let m = joue(&["9", "-", "4"]);
    assert_etat(&m, Some(4.0), " 9.0  4.0 ", false);
}

/* ------------------------ Unaires ------------------------ */

#[test]
fn unaire_applique_et_trace() {
    let m = joue(&["9", "√"]);
    assert_etat(&m, Some(3.0), " 9.0 √ ", false);

    let m = joue(&["4", "x²", "±"]);
    assert_etat(&m, Some(-16.0), " 4.0 x² ± ", false);

    let m = joue(&["4", "x⁻¹"]);
    assert_eq!(m.result(), Some(0.25));
}

#[test]
fn unaire_sans_operande() {
    let m = joue(&["√"]);
    assert_etat(&m, None, "", false);

    // Après un binaire, la valeur est absente : no-op aussi.
    let m = joue(&["2", "+", "cos"]);
    assert_etat(&m, None, " 2.0 + ", true);
}

#[test]
fn unaire_sur_second_operande() {
    let m = joue(&["2", "+", "9", "√", "="]);
    assert_etat(&m, Some(5.0), " 2.0 +  9.0 √ ", false);
}

#[test]
fn trigonometrie() {
    let m = joue(&["0", "cos"]);
    assert_eq!(m.result(), Some(1.0));
    let m = joue(&["0", "sinh"]);
    assert_eq!(m.result(), Some(0.0));
    let m = joue(&["0", "tanh"]);
    assert_eq!(m.result(), Some(0.0));
    let m = joue(&["0", "sin"]);
    assert_eq!(m.result(), Some(0.0));
    let m = joue(&["0", "tan"]);
    assert_eq!(m.result(), Some(0.0));
    let m = joue(&["0", "cosh"]);
    assert_eq!(m.result(), Some(1.0));
}

#[test]
fn unaires_lies_a_la_bonne_fonction() {
    // Entrée non nulle : sin/tan/cos et sinh/tanh/cosh se distinguent tous.
    let cas: [(&str, fn(f64) -> f64); 6] = [
        ("sin", f64::sin),
        ("cos", f64::cos),
        ("tan", f64::tan),
        ("sinh", f64::sinh),
        ("cosh", f64::cosh),
        ("tanh", f64::tanh),
    ];
    for (symbole, attendu) in cas {
        let m = joue(&["1", symbole]);
        assert_eq!(m.result(), Some(attendu(1.0)), "symbole={symbole:?}");
        assert_eq!(m.description(), format!(" 1.0 {symbole} "));
    }

    let valeurs: Vec<f64> = cas
        .iter()
        .filter_map(|(s, _)| joue(&["1", *s]).result())
        .collect();
    for (i, a) in valeurs.iter().enumerate() {
        for b in &valeurs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn constante_remplace_description() {
    let m = joue(&["2", "+", "3", "π"]);
    assert_etat(&m, Some(PI), "π ", true);
}

#[test]
fn constante_comme_second_operande() {
    let m = joue(&["2", "×", "π", "="]);
    assert_eq!(m.result(), Some(2.0 * PI));
    assert_eq!(m.description(), "π ");
}

#[test]
fn constante_e() {
    let m = joue(&["ℯ"]);
    assert_etat(&m, Some(std::f64::consts::E), "ℯ ", false);
}

/* ------------------------ Égal ------------------------ */

#[test]
fn egal_sans_attente_noop() {
    let m = joue(&["7", "="]);
    assert_etat(&m, Some(7.0), " 7.0 ", false);
    assert_etat(&joue(&["="]), None, "", false);
}

#[test]
fn egal_idempotent() {
    let mut m = joue(&["6", "×", "7", "="]);
    assert_eq!(m.result(), Some(42.0));
    let avant = m.description().to_string();
    m.perform_operation("=");
    assert_etat(&m, Some(42.0), &avant, false);
}

#[test]
fn resultat_reutilise() {
    let m = joue(&["6", "×", "7", "=", "+", "1", "="]);
    assert_etat(&m, Some(43.0), " 6.0 ×  7.0 +  1.0 ", false);
}

/* ------------------------ Efface ------------------------ */

#[test]
fn efface_remet_a_zero_pas_absent() {
    let m = joue(&["2", "+", "3", "C"]);
    assert_etat(&m, Some(0.0), "", false);

    let m = joue(&["C"]);
    assert_etat(&m, Some(0.0), "", false);
}

#[test]
fn efface_puis_unaire() {
    // Valeur 0 après C : l’unaire s’applique.
    let m = joue(&["C", "cos"]);
    assert_etat(&m, Some(1.0), "cos ", false);
}

/* ------------------------ Symbole inconnu ------------------------ */

#[test]
fn symbole_inconnu_ne_touche_rien() {
    let mut m = joue(&["2", "+", "3"]);
    let avant = (m.result(), m.description().to_string(), m.result_is_pending());
    m.perform_operation("?");
    m.perform_operation("");
    m.perform_operation("sqrt");
    let apres = (m.result(), m.description().to_string(), m.result_is_pending());
    assert_eq!(avant, apres);
}

/* ------------------------ Domaine mathématique ------------------------ */

#[test]
fn division_par_zero() {
    assert_eq!(joue(&["1", "÷", "0", "="]).result(), Some(f64::INFINITY));
    assert_eq!(joue(&["-1", "÷", "0", "="]).result(), Some(f64::NEG_INFINITY));
    assert!(joue(&["0", "÷", "0", "="]).result().is_some_and(f64::is_nan));
}

#[test]
fn hors_domaine_se_propage() {
    let m = joue(&["-4", "√"]);
    assert_eq!(m.description(), " -4.0 √ ");
    assert!(m.result().is_some_and(f64::is_nan));

    assert_eq!(joue(&["0", "x⁻¹"]).result(), Some(f64::INFINITY));

    // NaN continue dans une chaîne sans panique
    let m = joue(&["-4", "√", "+", "1", "="]);
    assert!(m.result().is_some_and(f64::is_nan));
}
