// src/noyau/lecture.rs
//
// Lecture d’une opérande (chaîne affichée -> f64).
//
// Règle : on lit le plus long PRÉFIXE numérique, comme une calculatrice de navigateur.
// - espaces de tête ignorés
// - [+-]? chiffres [. chiffres] [(e|E) [+-]? chiffres]
// - "Infinity" (signé ou non) accepté
// - au moins un chiffre avant l’exposant, sinon échec
//
// Conséquence voulue : "1.5e+" (résultat scientifique raccourci par DEL) se lit 1.5,
// alors que "", "Error" ou "." échouent.

const INFINI: &str = "Infinity";

/// Lit une opérande ; `None` si aucun préfixe numérique.
pub fn lire_operande(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut i = 0;

    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    if t[i..].starts_with(INFINI) {
        return Some(if b.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let debut_entier = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut nb_chiffres = i - debut_entier;

    if i < b.len() && b[i] == b'.' {
        let apres_point = i + 1;
        let mut j = apres_point;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        nb_chiffres += j - apres_point;
        i = j;
    }

    if nb_chiffres == 0 {
        return None;
    }

    // exposant : pris seulement s’il est complet
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let debut_exp = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_exp {
            i = j;
        }
    }

    t[..i].parse::<f64>().ok()
}
