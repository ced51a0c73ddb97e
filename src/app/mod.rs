use std::sync::Mutex;

use tauri::Manager;

use crate::content::ContentContext;
use crate::navigation::{GameNavigator, PanelNavigator};

mod invoke;

/// Construit et lance l'application Tauri avec plugins, état partagé et commandes IPC.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default();

    // Un seul lanceur à la fois: une seconde instance redonne le focus à la première.
    #[cfg(desktop)]
    let builder = builder.plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
        if let Some(window) = app.get_webview_window("main") {
            let _ = window.set_focus();
        }
    }));

    let builder = builder
        .manage(Mutex::new(GameNavigator::default()))
        .manage(Mutex::new(PanelNavigator::default()));
    let builder = invoke::register_invoke_handler(builder);

    builder
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            // Racine de recherche du contenu: le dossier de ressources du bundle.
            let resource_dir = match app.path().resource_dir() {
                Ok(dir) => Some(dir),
                Err(err) => {
                    log::error!("Unable to resolve resource directory: {}", err);
                    None
                }
            };
            app.manage(ContentContext::from_resource_dir(resource_dir));
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
