/// Commandes de vérification et de diagnostic du contenu de jeu.
pub mod content;
/// Commandes de navigation du lanceur.
pub mod navigation;
