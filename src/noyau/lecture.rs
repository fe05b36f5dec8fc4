// src/noyau/lecture.rs

/// Lit un opérande textuel.
///
/// - "" => None (pas d’opérande en attente)
/// - "." => 0 (forme canonique "0.")
/// - sinon : syntaxe décimale standard ("5.", ".5", "-3", "Infinity" acceptés)
pub fn lire_operande(texte: &str) -> Option<f64> {
    match texte.trim() {
        "" => None,
        "." => Some(0.0),
        t => t.parse::<f64>().ok(),
    }
}
