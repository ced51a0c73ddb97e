//! Entrypoint de la bibliothèque du lanceur NativeGame.
//!
//! Le cœur (recherche du contenu embarqué, diagnostic, état de présentation,
//! navigation) ne dépend pas de Tauri. La couche application et les commandes
//! IPC sont compilées avec la feature `app`.

#[cfg(feature = "app")]
mod app;
#[cfg(feature = "app")]
mod commands;

pub mod config;
pub mod content;
pub mod navigation;
pub mod status;
pub mod utils;

/// Lance l'application Tauri.
#[cfg(feature = "app")]
pub fn run() {
    app::run();
}
