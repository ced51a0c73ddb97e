/// Résultat d'une recherche du fichier de contenu dans le bundle.
///
/// Une seule variante est produite par appel à `locate`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LookupResult {
    /// Le dossier candidat existe et contient le fichier attendu.
    Found {
        full_path: String,
        matched_folder: String,
    },
    /// Le premier dossier candidat existant ne contient pas le fichier attendu.
    FolderMissingPayload {
        expected_path: String,
        matched_folder: String,
        reason: String,
    },
    /// Aucun dossier candidat n'existe sous la racine.
    NoCandidateFound {
        default_expected_path: String,
        reason: String,
    },
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found { .. })
    }

    /// Chemin complet, attendu ou par défaut selon la variante.
    pub fn path(&self) -> &str {
        match self {
            LookupResult::Found { full_path, .. } => full_path,
            LookupResult::FolderMissingPayload { expected_path, .. } => expected_path,
            LookupResult::NoCandidateFound {
                default_expected_path,
                ..
            } => default_expected_path,
        }
    }

    pub fn matched_folder(&self) -> Option<&str> {
        match self {
            LookupResult::Found { matched_folder, .. }
            | LookupResult::FolderMissingPayload { matched_folder, .. } => Some(matched_folder),
            LookupResult::NoCandidateFound { .. } => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            LookupResult::Found { .. } => None,
            LookupResult::FolderMissingPayload { reason, .. }
            | LookupResult::NoCandidateFound { reason, .. } => Some(reason),
        }
    }
}

/// Erreurs bloquantes de la recherche de contenu.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    /// La racine du bundle est absente ou inaccessible.
    #[error("Could not access app bundle at '{root}': {detail}")]
    RootUnavailable { root: String, detail: String },
    /// La requête ne respecte pas ses invariants (liste vide, nom vide).
    #[error("Invalid content request: {0}")]
    InvalidRequest(String),
}

impl LocateError {
    /// Code d'erreur stable côté application.
    pub fn code(&self) -> &'static str {
        match self {
            LocateError::RootUnavailable { .. } => "ROOT_UNAVAILABLE",
            LocateError::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }
}

/// Rapport de diagnostic, une ligne lisible par entrée.
///
/// Toujours non vide une fois produit par `diagnose`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct DiagnosticReport {
    lines: Vec<String>,
}

impl DiagnosticReport {
    pub(crate) fn single(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Extend<String> for DiagnosticReport {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.lines.extend(iter);
    }
}
