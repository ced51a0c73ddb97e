/// Utilitaires de formatage pour les diagnostics.
pub mod format;
