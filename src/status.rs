use crate::content::{DiagnosticReport, LocateError, LookupResult};

/// État du contenu de jeu tel qu'affiché par le frontend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentState {
    #[default]
    Loading,
    Found,
    NotFound,
    Error,
}

/// Modèle de présentation du contenu: état, message, chemin détecté, debug.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStatus {
    pub state: ContentState,
    pub error_message: String,
    pub detected_path: String,
    pub debug_info: Vec<String>,
}

impl ContentStatus {
    /// État initial, et état remis à zéro avant chaque nouvelle vérification.
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn from_outcome(outcome: Result<LookupResult, LocateError>) -> Self {
        let mut status = Self::loading();
        match outcome {
            Ok(result) => status.apply_result(&result),
            Err(err) => status.apply_error(&err),
        }
        status
    }

    pub fn apply_result(&mut self, result: &LookupResult) {
        self.detected_path = result.path().to_string();
        if result.is_found() {
            self.state = ContentState::Found;
        } else {
            self.state = ContentState::NotFound;
            if let Some(reason) = result.reason() {
                self.error_message = reason.to_string();
            }
        }
    }

    pub fn apply_error(&mut self, err: &LocateError) {
        self.state = ContentState::Error;
        self.error_message = err.to_string();
    }

    pub fn attach_diagnostics(&mut self, report: DiagnosticReport) {
        self.debug_info = report.into_lines();
    }

    /// Vrai quand le frontend doit proposer de relancer la vérification.
    pub fn is_retryable(&self) -> bool {
        matches!(self.state, ContentState::NotFound | ContentState::Error)
    }
}
