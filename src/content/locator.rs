use std::fs;
use std::path::Path;

use super::request::SearchRequest;
use super::types::{LocateError, LookupResult};

/// Vérifie que la racine du bundle existe, est un dossier et peut être listée.
///
/// Une racine présente mais illisible rendrait chaque candidat invisible.
fn ensure_root(root: &Path) -> Result<(), LocateError> {
    let unavailable = |detail: String| LocateError::RootUnavailable {
        root: root.to_string_lossy().to_string(),
        detail,
    };

    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => {}
        Ok(_) => return Err(unavailable("path is not a directory".to_string())),
        Err(err) => return Err(unavailable(err.to_string())),
    }

    fs::read_dir(root)
        .map(|_| ())
        .map_err(|err| unavailable(err.to_string()))
}

/// Cherche le fichier de contenu dans les dossiers candidats, par ordre de priorité.
///
/// Le premier dossier existant arrête la recherche, qu'il contienne le fichier
/// ou non: un dossier présent mais incomplet est signalé tel quel plutôt que
/// de passer au candidat suivant.
pub fn locate(request: &SearchRequest) -> Result<LookupResult, LocateError> {
    let root = request.root();
    ensure_root(root)?;

    let payload = request.payload_file();

    for folder in request.candidate_folders() {
        let folder_path = request.folder_path(folder);
        if !folder_path.is_dir() {
            log::debug!("Content folder '{}' not present", folder_path.display());
            continue;
        }

        let payload_path = request.payload_path(folder);
        let path = payload_path.to_string_lossy().to_string();

        if payload_path.is_file() {
            log::info!("Game content found at {path}");
            return Ok(LookupResult::Found {
                full_path: path,
                matched_folder: folder.clone(),
            });
        }

        log::warn!("Folder '{folder}' exists but '{payload}' is missing");
        return Ok(LookupResult::FolderMissingPayload {
            expected_path: path,
            matched_folder: folder.clone(),
            reason: format!("Folder '{folder}' exists but '{payload}' not found"),
        });
    }

    let default_path = request.payload_path(request.primary_folder());
    let expected = request.candidate_folders().join(", ");
    log::warn!("No game content folder found under {}", root.display());

    Ok(LookupResult::NoCandidateFound {
        default_expected_path: default_path.to_string_lossy().to_string(),
        reason: format!("No game content folders found. Expected: {expected}"),
    })
}
