//! Tests scénarios : transitions du moteur, touche par touche.
//!
//! Chaque test part d’un moteur neuf et tape une séquence comme un utilisateur.
//! Rappel clavier : - pour −, * pour ×, / pour ÷.

use super::commande::Commande;
use super::format::formater_nombre;
use super::moteur::{Moteur, ERREUR};
use super::operation::Operation;

fn tape(touches: &str) -> Moteur {
    let mut m = Moteur::new();
    m.taper(touches);
    m
}

fn assert_affiche(touches: &str, attendu: &str) {
    let m = tape(touches);
    assert_eq!(m.courante, attendu, "touches={touches:?}");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn sci_etat_initial() {
    let m = Moteur::new();
    assert_eq!(m.courante, "0");
    assert!(m.precedente.is_empty());
    assert_eq!(m.operation, None);
    assert!(!m.attente_operande);
    assert_eq!(m.ligne_precedente(), "");
}

#[test]
fn sci_pas_de_zero_de_tete() {
    assert_affiche("0", "0");
    assert_affiche("007", "7");
    assert_affiche("120", "120");
}

#[test]
fn sci_chiffre_en_chaine() {
    let mut m = Moteur::new();
    m.ajouter_chiffre("12");
    m.ajouter_chiffre("3");
    assert_eq!(m.courante, "123");
}

#[test]
fn sci_point_unique() {
    assert_affiche("1..", "1.");
    assert_affiche("1.5.2", "1.52");
    assert_affiche(".", "0.");
    assert_affiche("..5", "0.5");
}

#[test]
fn sci_point_apres_operation_demarre_nouveau_numeral() {
    let m = tape("3+.");
    assert_eq!(m.courante, "0.");
    assert!(!m.attente_operande);
    assert_eq!(m.precedente, "3");
}

/* ------------------------ DEL ------------------------ */

#[test]
fn sci_effacer_dernier() {
    let mut m = Moteur::new();
    m.effacer_dernier();
    assert_eq!(m, Moteur::new(), "DEL sur 0 : rien");

    m.ajouter_chiffre("12");
    m.effacer_dernier();
    assert_eq!(m.courante, "1");

    m.effacer_dernier();
    assert_eq!(m.courante, "0", "un seul caractère => 0");
}

#[test]
fn sci_effacer_ne_touche_pas_l_operation() {
    let mut m = tape("8*25");
    m.effacer_dernier();
    assert_eq!(m.courante, "2");
    assert_eq!(m.precedente, "8");
    assert_eq!(m.operation, Some(Operation::Multiplication));
}

/* ------------------------ Calcul ------------------------ */

#[test]
fn sci_quatre_operations() {
    assert_affiche("7+5=", "12");
    assert_affiche("7-5=", "2");
    assert_affiche("5-7=", "-2");
    assert_affiche("7*5=", "35");
    assert_affiche("7/5=", "1.4");
}

#[test]
fn sci_resultat_egal_format_du_calcul() {
    let cas = [
        ("12.5", Operation::Addition, "0.25"),
        ("3", Operation::Soustraction, "0.1"),
        ("1", Operation::Division, "3"),
        ("2", Operation::Division, "3"),
        ("0.1", Operation::Multiplication, "3"),
        ("123456", Operation::Multiplication, "98765"),
        ("1", Operation::Division, "9999999"),
    ];

    for (a, op, b) in cas {
        let mut m = Moteur::new();
        m.ajouter_chiffre(a);
        m.choisir_operation(op);
        m.ajouter_chiffre(b);
        m.calculer();

        let va: f64 = a.parse().unwrap();
        let vb: f64 = b.parse().unwrap();
        let attendu = formater_nombre(op.appliquer(va, vb).unwrap());
        assert_eq!(m.courante, attendu, "{a} {op} {b}");
        assert!(m.precedente.is_empty());
        assert_eq!(m.operation, None);
        assert!(m.attente_operande);
    }
}

#[test]
fn sci_artefacts_binaires_effaces() {
    assert_affiche("0.1+0.2=", "0.3");
    assert_affiche("1/3=", "0.33333333");
    assert_affiche("2/3=", "0.66666667");
}

#[test]
fn sci_enchainement_gauche_droite() {
    let mut m = Moteur::new();
    m.reinitialiser();
    m.ajouter_chiffre("2");
    m.choisir_operation(Operation::Addition);
    m.ajouter_chiffre("3");
    m.choisir_operation(Operation::Multiplication);
    assert_eq!(m.precedente, "5", "repli de 2+3 avant ×");
    assert_eq!(m.ligne_precedente(), "5 ×");
    m.ajouter_chiffre("4");
    m.calculer();
    assert_eq!(m.courante, "20", "(2+3)×4, pas 2+(3×4)");
}

#[test]
fn sci_changer_d_operation_replie_avec_la_meme_operande() {
    // 6 + puis × sans nouvelle saisie : replie 6+6
    let m = tape("6+*");
    assert_eq!(m.precedente, "12");
    assert_eq!(m.operation, Some(Operation::Multiplication));
}

#[test]
fn sci_egal_sans_operation_ne_fait_rien() {
    let m0 = tape("42");
    let mut m = m0.clone();
    m.calculer();
    assert_eq!(m, m0);
}

#[test]
fn sci_egal_repete_ne_fait_rien() {
    let m0 = tape("9*9=");
    assert_eq!(m0.courante, "81");
    let mut m = m0.clone();
    m.calculer();
    assert_eq!(m, m0);
}

#[test]
fn sci_resultat_puis_chiffre_repart_de_zero() {
    assert_affiche("2+2=7", "7");
    assert_affiche("2+2=.5", "0.5");
}

#[test]
fn sci_resultat_reutilise_comme_operande() {
    assert_affiche("2+2=*10=", "40");
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn sci_division_par_zero() {
    let m = tape("5/0=");
    assert_eq!(m.courante, ERREUR);
    assert!(m.est_en_erreur());
    assert!(m.precedente.is_empty());
    assert_eq!(m.operation, None);
    assert!(m.attente_operande);
    assert_eq!(m.ligne_precedente(), "");
}

#[test]
fn sci_division_par_zero_decimal() {
    assert_affiche("5/0.000=", ERREUR);
}

#[test]
fn sci_zero_divise_par_nombre() {
    assert_affiche("0/5=", "0");
}

#[test]
fn sci_sortie_de_l_etat_erreur() {
    assert_affiche("5/0=3", "3");
    assert_affiche("5/0=.", "0.");

    let mut m = tape("5/0=");
    m.reinitialiser();
    assert_eq!(m, Moteur::new());

    // opération sur "Error" : l’opérande gauche est illisible, le calcul suivant ne fait rien
    let mut m = tape("5/0=+");
    assert_eq!(m.precedente, ERREUR);
    m.taper("2=");
    assert_eq!(m.courante, "2");
    assert_eq!(m.precedente, ERREUR);
}

/* ------------------------ Scientifique ------------------------ */

#[test]
fn sci_grands_resultats() {
    assert_affiche("99999*99999=", "9.999800e+9");
    assert_affiche("999999999+1=", "1.000000e+9");
    assert_affiche("999999998+1=", "999999999");
}

#[test]
fn sci_petits_resultats() {
    assert_affiche("1/10000000=", "1.000000e-7");
    assert_affiche("1/1000000=", "0.000001");
}

#[test]
fn sci_resultat_scientifique_reutilise() {
    assert_affiche("99999*99999=+1=", "9.999800e+9");
    assert_affiche("99999*99999=/2=", "4.999900e+9");
    assert_affiche("99999*99999=/100000=", "99998");
}

#[test]
fn sci_resultat_scientifique_raccourci_par_del() {
    let mut m = tape("99999*99999=");
    m.effacer_dernier();
    assert_eq!(m.courante, "9.999800e+");
    m.taper("*2=");
    // lecture du préfixe "9.999800"
    assert_eq!(m.courante, "19.9996");
}

/* ------------------------ AC ------------------------ */

#[test]
fn sci_reinitialiser_point_fixe() {
    for touches in ["", "123", "1+", "1+2", "1+2=", "5/0=", "1..", "3*4-"] {
        let mut m = tape(touches);
        m.reinitialiser();
        assert_eq!(m, Moteur::new(), "touches={touches:?}");
        m.reinitialiser();
        assert_eq!(m, Moteur::new(), "idempotent, touches={touches:?}");
    }
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn sci_ligne_precedente() {
    assert_eq!(tape("12").ligne_precedente(), "");
    assert_eq!(tape("12+").ligne_precedente(), "12 +");
    assert_eq!(tape("12-").ligne_precedente(), "12 −");
    assert_eq!(tape("12/3").ligne_precedente(), "12 ÷");
    assert_eq!(tape("12/3=").ligne_precedente(), "");
}

#[test]
fn sci_aiguillage_commandes() {
    let mut m = Moteur::new();
    for cmd in [
        Commande::Chiffre('4'),
        Commande::Point,
        Commande::Chiffre('5'),
        Commande::Operation(Operation::Multiplication),
        Commande::Chiffre('2'),
        Commande::Calculer,
    ] {
        m.appliquer(cmd);
    }
    assert_eq!(m.courante, "9");

    m.appliquer(Commande::Effacer);
    assert_eq!(m.courante, "0");

    m.appliquer(Commande::Chiffre('7'));
    m.appliquer(Commande::Reinitialiser);
    assert_eq!(m, Moteur::new());
}

#[test]
fn sci_commande_depuis_caractere() {
    assert_eq!(Commande::depuis_caractere('7'), Some(Commande::Chiffre('7')));
    assert_eq!(Commande::depuis_caractere('.'), Some(Commande::Point));
    assert_eq!(Commande::depuis_caractere('='), Some(Commande::Calculer));
    assert_eq!(
        Commande::depuis_caractere('-'),
        Some(Commande::Operation(Operation::Soustraction))
    );
    assert_eq!(
        Commande::depuis_caractere('÷'),
        Some(Commande::Operation(Operation::Division))
    );
    assert_eq!(Commande::depuis_caractere('x'), None);
    assert_eq!(Commande::depuis_caractere(' '), None);
}

#[test]
fn sci_operation_depuis_symbole() {
    for op in Operation::TOUTES {
        assert_eq!(op.symbole().parse::<Operation>(), Ok(op));
        assert_eq!(op.touche().to_string().parse::<Operation>(), Ok(op));
    }
    let e = "%".parse::<Operation>().unwrap_err();
    assert!(e.to_string().contains("opérateur inconnu"));
}

#[test]
fn sci_grand_resultat_demi_arrondi_vers_le_haut() {
    assert_affiche("1000000000+500=", "1.000001e+9");
    assert_affiche("1000000000+2500=", "1.000003e+9");
}
