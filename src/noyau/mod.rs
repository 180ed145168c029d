//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - operation.rs : + − × ÷ (symboles, alias clavier, application)
//! - lecture.rs   : lecture d’une opérande (préfixe numérique)
//! - format.rs    : mise en forme d’un résultat (scientifique / 8 décimales)
//! - moteur.rs    : état de saisie + transitions
//! - commande.rs  : aiguillage déclencheur -> transition

pub mod commande;
pub mod format;
pub mod lecture;
pub mod moteur;
pub mod operation;

#[cfg(test)]
mod tests_scientifiques;



// API publique minimale
pub use commande::Commande;
pub use moteur::Moteur;
pub use operation::Operation;
