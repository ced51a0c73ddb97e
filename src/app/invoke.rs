use crate::commands;

/// Enregistre la liste unique des commandes IPC exposées au frontend.
pub fn register_invoke_handler(builder: tauri::Builder<tauri::Wry>) -> tauri::Builder<tauri::Wry> {
    builder.invoke_handler(tauri::generate_handler![
        commands::content::check_game_content,
        commands::content::debug_bundle_contents,
        commands::navigation::navigate,
        commands::navigation::navigate_back,
        commands::navigation::navigate_to_root,
        commands::navigation::navigation_state,
        commands::navigation::select_panel,
        commands::navigation::finish_panel_transition,
        commands::navigation::panel_state,
        commands::navigation::panel_title_bar
    ])
}
