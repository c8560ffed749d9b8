use std::sync::Arc;

use crate::cv::loader::CvLibrary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Immutable CV documents. Handlers read from here; nothing writes after startup.
    pub cvs: Arc<CvLibrary>,
}

impl AppState {
    pub fn new(cvs: CvLibrary) -> Self {
        Self { cvs: Arc::new(cvs) }
    }
}
