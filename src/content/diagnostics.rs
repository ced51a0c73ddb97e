use std::fs;
use std::io;
use std::path::Path;

use crate::utils::format::format_file_size;

use super::request::SearchRequest;
use super::types::DiagnosticReport;

/// Liste les entrées d'un dossier, triées par nom.
fn list_entries(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().to_string()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}

/// Produit les lignes de diagnostic d'un dossier candidat.
fn audit_candidate(request: &SearchRequest, folder: &str) -> Vec<String> {
    let folder_path = request.folder_path(folder);
    if !folder_path.is_dir() {
        return vec![format!("{folder}/: Not found")];
    }

    let entries = match list_entries(&folder_path) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("Unable to list '{}': {}", folder_path.display(), err);
            return vec![format!("{folder}/: Error reading contents ({err})")];
        }
    };

    let mut lines = vec![format!("{folder}/: [{}]", entries.join(", "))];

    let payload = request.payload_file();
    let payload_path = request.payload_path(folder);
    if payload_path.is_file() {
        match fs::metadata(&payload_path) {
            Ok(metadata) => lines.push(format!(
                "   {payload}: {} ({} bytes)",
                format_file_size(metadata.len()),
                metadata.len()
            )),
            Err(err) => lines.push(format!("   {payload}: size unavailable ({err})")),
        }
    }

    lines
}

/// Audit complet de tous les dossiers candidats.
///
/// Contrairement à `locate`, tous les candidats sont inspectés. Les erreurs de
/// lecture sont converties en lignes du rapport; la fonction n'échoue jamais
/// et retourne toujours au moins une ligne.
pub fn diagnose(request: &SearchRequest) -> DiagnosticReport {
    let root = request.root();
    if !root.is_dir() {
        return DiagnosticReport::single(format!(
            "Cannot access bundle path: {}",
            root.display()
        ));
    }

    // Racine présente mais illisible: même verdict que `locate`.
    let entries = match list_entries(root) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("Unable to list bundle root '{}': {}", root.display(), err);
            return DiagnosticReport::single(format!(
                "Cannot access bundle path: {} ({err})",
                root.display()
            ));
        }
    };

    let mut report = DiagnosticReport::default();
    report.push(format!("Bundle: {}", root.display()));
    report.push(format!("Root contents: {} items", entries.len()));

    for folder in request.candidate_folders() {
        report.extend(audit_candidate(request, folder));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(root: &Path) -> SearchRequest {
        SearchRequest::new(root, ["GameContent", "PCK", "Pack", "GameData"], "game.pck").unwrap()
    }

    #[test]
    fn unavailable_root_yields_single_line() {
        let temp = TempDir::new().unwrap();
        let report = diagnose(&request(&temp.path().join("missing")));

        assert_eq!(report.len(), 1);
        assert!(report.lines()[0].starts_with("Cannot access bundle path"));
    }

    #[test]
    fn audits_every_candidate() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("PCK")).unwrap();
        fs::create_dir(temp.path().join("GameData")).unwrap();
        fs::write(temp.path().join("GameData").join("game.pck"), vec![0u8; 2048]).unwrap();
        fs::write(temp.path().join("GameData").join("readme.txt"), b"hi").unwrap();

        let lines = diagnose(&request(temp.path())).into_lines();

        assert_eq!(lines[0], format!("Bundle: {}", temp.path().display()));
        assert_eq!(lines[1], "Root contents: 2 items");
        assert_eq!(lines[2], "GameContent/: Not found");
        assert_eq!(lines[3], "PCK/: []");
        assert_eq!(lines[4], "Pack/: Not found");
        assert_eq!(lines[5], "GameData/: [game.pck, readme.txt]");
        assert_eq!(lines[6], "   game.pck: 2 KB (2048 bytes)");
        assert_eq!(lines.len(), 7);
    }

    /// Retire tous les droits d'un dossier; `false` si l'utilisateur courant le lit quand même.
    #[cfg(unix)]
    fn lock_dir(path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::read_dir(path).is_ok() {
            unlock_dir(path);
            return false;
        }
        true
    }

    #[cfg(unix)]
    fn unlock_dir(path: &Path) {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_candidate_does_not_stop_the_audit() {
        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("PCK");
        fs::create_dir(&locked).unwrap();
        fs::create_dir(temp.path().join("GameData")).unwrap();
        fs::write(temp.path().join("GameData").join("game.pck"), b"GDPC").unwrap();

        if !lock_dir(&locked) {
            return;
        }
        let lines = diagnose(&request(temp.path())).into_lines();
        unlock_dir(&locked);

        assert!(
            lines[3].starts_with("PCK/: Error reading contents ("),
            "unexpected line: {}",
            lines[3]
        );
        assert_eq!(lines[4], "Pack/: Not found");
        assert_eq!(lines[5], "GameData/: [game.pck]");
        assert_eq!(lines[6], "   game.pck: 4 bytes (4 bytes)");
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_root_yields_single_line() {
        let temp = TempDir::new().unwrap();
        let bundle = temp.path().join("bundle");
        fs::create_dir_all(bundle.join("GameContent")).unwrap();

        if !lock_dir(&bundle) {
            return;
        }
        let report = diagnose(&request(&bundle));
        unlock_dir(&bundle);

        assert_eq!(report.len(), 1);
        assert!(report.lines()[0].starts_with("Cannot access bundle path"));
    }

    #[test]
    fn never_empty_for_existing_root() {
        let temp = TempDir::new().unwrap();
        let report = diagnose(&request(temp.path()));

        assert!(!report.is_empty());
        assert_eq!(report.lines()[1], "Root contents: 0 items");
    }
}
