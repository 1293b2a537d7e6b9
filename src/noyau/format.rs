// src/noyau/format.rs

/// Rendu d’un opérande dans la description : toujours une partie décimale
/// pour les entiers (2 -> "2.0"), exposant signé sur deux chiffres au moins
/// (1e16 -> "1e+16", 1e-5 -> "1e-05"), "nan" / "inf" / "-inf".
pub fn format_operande(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    // Debug bascule déjà en notation scientifique hors [1e-4, 1e16).
    let s = format!("{x:?}");
    match s.split_once('e') {
        Some((mantisse, exposant)) => match exposant.parse::<i32>() {
            Ok(e) => {
                let signe = if e < 0 { '-' } else { '+' };
                format!("{mantisse}e{signe}{:02}", e.unsigned_abs())
            }
            Err(_) => s,
        },
        None => s,
    }
}

/// Rendu d’un résultat pour l’écran : "2" plutôt que "2.0", vide si absent.
pub fn format_resultat(valeur: Option<f64>) -> String {
    match valeur {
        None => String::new(),
        Some(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 => {
            // -0.0 s’affiche "0"
            format!("{}", x as i64)
        }
        // Grands / très petits : notation scientifique (écran borné)
        Some(x) if x.is_finite() && x != 0.0 && (x.abs() >= 1e15 || x.abs() < 1e-6) => {
            format!("{x:e}")
        }
        Some(x) => format!("{x}"),
    }
}
