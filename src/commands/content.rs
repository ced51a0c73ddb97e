use tauri::State;

use crate::content::ContentContext;
use crate::status::ContentStatus;

/// Commande IPC de vérification du contenu de jeu (chargement initial et "retry").
///
/// La recherche tourne sur un thread bloquant pour ne pas figer l'UI. En cas
/// d'échec, le rapport de diagnostic est joint au statut.
#[tauri::command]
pub async fn check_game_content(
    context: State<'_, ContentContext>,
) -> Result<ContentStatus, String> {
    let context = context.inner().clone();
    tauri::async_runtime::spawn_blocking(move || {
        let mut status = ContentStatus::from_outcome(context.locate());
        if status.is_retryable() {
            status.attach_diagnostics(context.diagnose());
        }
        status
    })
    .await
    .map_err(|e| format!("Content check task failed: {}", e))
}

/// Commande IPC de diagnostic des dossiers de contenu embarqués.
#[tauri::command]
pub async fn debug_bundle_contents(
    context: State<'_, ContentContext>,
) -> Result<Vec<String>, String> {
    let context = context.inner().clone();
    tauri::async_runtime::spawn_blocking(move || context.diagnose().into_lines())
        .await
        .map_err(|e| format!("Content diagnostics task failed: {}", e))
}
