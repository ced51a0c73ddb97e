use std::path::{Path, PathBuf};

use super::types::LocateError;

/// Requête de recherche: racine, dossiers candidats par priorité, fichier attendu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    root: PathBuf,
    candidate_folders: Vec<String>,
    payload_file: String,
}

impl SearchRequest {
    /// Construit une requête en vérifiant ses invariants.
    ///
    /// La liste des candidats doit être non vide et aucun nom (dossier ou
    /// fichier) ne peut être vide. L'ordre de la liste est l'ordre de priorité.
    pub fn new<I, S>(
        root: impl Into<PathBuf>,
        candidate_folders: I,
        payload_file: impl Into<String>,
    ) -> Result<Self, LocateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidate_folders: Vec<String> =
            candidate_folders.into_iter().map(Into::into).collect();
        let payload_file = payload_file.into();

        if candidate_folders.is_empty() {
            return Err(LocateError::InvalidRequest(
                "candidate folder list is empty".to_string(),
            ));
        }
        if let Some(position) = candidate_folders
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(LocateError::InvalidRequest(format!(
                "candidate folder #{} has an empty name",
                position + 1
            )));
        }
        if payload_file.trim().is_empty() {
            return Err(LocateError::InvalidRequest(
                "payload file name is empty".to_string(),
            ));
        }

        Ok(Self {
            root: root.into(),
            candidate_folders,
            payload_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn candidate_folders(&self) -> &[String] {
        &self.candidate_folders
    }

    pub fn payload_file(&self) -> &str {
        &self.payload_file
    }

    /// Premier candidat, utilisé pour construire le chemin par défaut.
    pub fn primary_folder(&self) -> &str {
        // Non vide par construction.
        &self.candidate_folders[0]
    }

    pub(crate) fn folder_path(&self, folder: &str) -> PathBuf {
        self.root.join(folder)
    }

    pub(crate) fn payload_path(&self, folder: &str) -> PathBuf {
        self.folder_path(folder).join(&self.payload_file)
    }
}
