use std::path::{Path, PathBuf};

use crate::config::ContentConfig;

use super::request::SearchRequest;
use super::types::{DiagnosticReport, LocateError, LookupResult};
use super::{diagnose, locate};

/// Contexte de recherche partagé par l'application: racine des ressources et configuration.
#[derive(Clone, Debug)]
pub struct ContentContext {
    resource_dir: Option<PathBuf>,
    config: ContentConfig,
}

impl ContentContext {
    pub fn new(resource_dir: Option<PathBuf>, config: ContentConfig) -> Self {
        Self {
            resource_dir,
            config,
        }
    }

    /// Charge la configuration depuis le dossier de ressources s'il est connu.
    pub fn from_resource_dir(resource_dir: Option<PathBuf>) -> Self {
        let config = resource_dir
            .as_deref()
            .map(ContentConfig::from_resource_dir)
            .unwrap_or_default();
        Self::new(resource_dir, config)
    }

    pub fn resource_dir(&self) -> Option<&Path> {
        self.resource_dir.as_deref()
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Construit la requête; échoue si le dossier de ressources n'a pas pu être résolu.
    pub fn request(&self) -> Result<SearchRequest, LocateError> {
        let root = self
            .resource_dir
            .clone()
            .ok_or_else(|| LocateError::RootUnavailable {
                root: String::new(),
                detail: "resource directory could not be resolved".to_string(),
            })?;
        self.config.to_request(root)
    }

    pub fn locate(&self) -> Result<LookupResult, LocateError> {
        locate(&self.request()?)
    }

    /// Diagnostic best-effort: une requête invalide devient une ligne du rapport.
    pub fn diagnose(&self) -> DiagnosticReport {
        match self.request() {
            Ok(request) => diagnose(&request),
            Err(LocateError::RootUnavailable { .. }) => {
                DiagnosticReport::single("Cannot access bundle path")
            }
            Err(err) => DiagnosticReport::single(err.to_string()),
        }
    }
}
