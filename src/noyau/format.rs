// src/noyau/format.rs
//
// Mise en forme d’un résultat calculé (jamais d’une saisie en cours).
//
// Politique :
// - |n| > 999 999 999 ou 0 < |n| < 0.000001 : scientifique, 6 décimales de mantisse,
//   exposant toujours signé ("1.000000e+9", "-2.500000e-7")
// - sinon : arrondi à 8 décimales, écriture décimale minimale, zéros finaux retirés
// - non fini : "Infinity", "-Infinity", "NaN"

/// Au-delà : notation scientifique.
const BORNE_GRANDS: f64 = 999_999_999.0;

/// En deçà (et non nul) : notation scientifique.
const BORNE_PETITS: f64 = 0.000_001;

/// Décimales de la mantisse scientifique.
const DECIMALES_MANTISSE: usize = 6;

/// Facteur d’arrondi (8 décimales) : efface les artefacts binaires (0.1 + 0.2).
const FACTEUR_ARRONDI: f64 = 100_000_000.0;

/// Formate un résultat. Fonction pure : même entrée => même chaîne.
pub fn formater_nombre(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }

    let abs = n.abs();
    if abs > BORNE_GRANDS || (abs < BORNE_PETITS && n != 0.0) {
        return formater_scientifique(n);
    }

    let arrondi = arrondir_demi_haut(n * FACTEUR_ARRONDI) / FACTEUR_ARRONDI;

    // -0 => "0"
    if arrondi == 0.0 {
        return "0".to_string();
    }

    let s = format!("{arrondi}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Décimales suffisantes pour le développement décimal EXACT de tout f64.
const DECIMALES_EXACTES: usize = 767;

/// Mantisse à 6 décimales + exposant signé.
///
/// Les demis s’arrondissent en s’éloignant de zéro (1000000500 => 1.000001e+9),
/// pas au pair comme `{:.6e}`.
fn formater_scientifique(n: f64) -> String {
    let exact = format!("{:.*e}", DECIMALES_EXACTES, n.abs());
    let Some((mantisse, exp)) = exact.split_once('e') else {
        return exact;
    };
    let Ok(mut exposant) = exp.parse::<i32>() else {
        return exact;
    };

    // chiffres significatifs, point retiré
    let mut chiffres: Vec<u8> = mantisse.bytes().filter(u8::is_ascii_digit).collect();
    let garde = DECIMALES_MANTISSE + 1;
    let arrondir = chiffres.get(garde).is_some_and(|&c| c >= b'5');
    chiffres.truncate(garde);

    if arrondir && incrementer_chiffres(&mut chiffres) {
        // 9.999999 -> 10.000000 : on renormalise
        chiffres.insert(0, b'1');
        chiffres.truncate(garde);
        exposant += 1;
    }

    let signe = if n < 0.0 { "-" } else { "" };
    let (tete, queue) = chiffres.split_at(1);
    let tete = String::from_utf8_lossy(tete);
    let queue = String::from_utf8_lossy(queue);
    let signe_exp = if exposant < 0 { "-" } else { "+" };
    format!("{signe}{tete}.{queue}e{signe_exp}{}", exposant.abs())
}

/// +1 sur le dernier chiffre avec retenue ; vrai si la retenue déborde à gauche.
fn incrementer_chiffres(chiffres: &mut [u8]) -> bool {
    for c in chiffres.iter_mut().rev() {
        if *c == b'9' {
            *c = b'0';
        } else {
            *c += 1;
            return false;
        }
    }
    true
}

/// Arrondi à l’entier, les demis vers +∞ (-2.5 => -2, 2.5 => 3).
pub(super) fn arrondir_demi_haut(x: f64) -> f64 {
    let plancher = x.floor();
    if x - plancher >= 0.5 {
        plancher + 1.0
    } else {
        plancher
    }
}
