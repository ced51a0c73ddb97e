mod context;
mod diagnostics;
mod locator;
mod request;
mod types;

pub use context::ContentContext;
pub use diagnostics::diagnose;
pub use locator::locate;
pub use request::SearchRequest;
pub use types::{DiagnosticReport, LocateError, LookupResult};
