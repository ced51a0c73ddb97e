//! Configuration de la recherche du contenu de jeu.
//!
//! Les dossiers candidats et le nom du fichier attendu ne sont jamais codés en
//! dur dans le localisateur: ils viennent d'ici, avec un `content.json`
//! optionnel placé dans les ressources de l'application.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::{LocateError, SearchRequest};

/// Nom du fichier de configuration cherché dans le dossier de ressources.
pub const CONFIG_FILE_NAME: &str = "content.json";

const DEFAULT_CANDIDATE_FOLDERS: [&str; 4] = ["GameContent", "PCK", "Pack", "GameData"];
const DEFAULT_PAYLOAD_FILE: &str = "game.pck";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unable to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Dossiers candidats (par priorité) et fichier de contenu attendu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfig {
    pub candidate_folders: Vec<String>,
    pub payload_file: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            candidate_folders: DEFAULT_CANDIDATE_FOLDERS
                .iter()
                .map(|folder| folder.to_string())
                .collect(),
            payload_file: DEFAULT_PAYLOAD_FILE.to_string(),
        }
    }
}

impl ContentConfig {
    /// Lit un fichier JSON; un fichier absent donne la configuration par défaut.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No content config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Charge `content.json` depuis les ressources, sans jamais échouer.
    pub fn from_resource_dir(resource_dir: &Path) -> Self {
        match Self::load(&resource_dir.join(CONFIG_FILE_NAME)) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; falling back to default content config");
                Self::default()
            }
        }
    }

    pub fn to_request(&self, root: impl Into<PathBuf>) -> Result<SearchRequest, LocateError> {
        SearchRequest::new(
            root,
            self.candidate_folders.iter().cloned(),
            self.payload_file.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_reference_layout() {
        let config = ContentConfig::default();
        assert_eq!(
            config.candidate_folders,
            ["GameContent", "PCK", "Pack", "GameData"]
        );
        assert_eq!(config.payload_file, "game.pck");
    }

    #[test]
    fn missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ContentConfig::load(&temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, ContentConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "payloadFile": "main.pck" }"#).unwrap();

        let config = ContentConfig::load(&path).unwrap();
        assert_eq!(config.payload_file, "main.pck");
        assert_eq!(config.candidate_folders.len(), 4);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            ContentConfig::load(&path),
            Err(ConfigError::Parse { .. })
        ));
        assert_eq!(
            ContentConfig::from_resource_dir(temp.path()),
            ContentConfig::default()
        );
    }

    #[test]
    fn builds_request_rooted_at_resources() {
        let request = ContentConfig::default().to_request("/bundle").unwrap();
        assert_eq!(request.root(), Path::new("/bundle"));
        assert_eq!(request.primary_folder(), "GameContent");
    }
}
