use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::config::Config;
use crate::cv::models::CvData;

/// Which authored CV document a request wants (`?cv=alt`).
/// Anything other than `alt` selects the default document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CvVariant {
    #[default]
    Default,
    Alt,
}

impl From<String> for CvVariant {
    fn from(raw: String) -> Self {
        if raw.trim().eq_ignore_ascii_case("alt") {
            CvVariant::Alt
        } else {
            CvVariant::Default
        }
    }
}

impl CvVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CvVariant::Default => "default",
            CvVariant::Alt => "alt",
        }
    }
}

/// All CV documents, loaded once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct CvLibrary {
    pub default: CvData,
    pub alt: Option<CvData>,
}

impl CvLibrary {
    pub fn get(&self, variant: CvVariant) -> Option<&CvData> {
        match variant {
            CvVariant::Default => Some(&self.default),
            CvVariant::Alt => self.alt.as_ref(),
        }
    }

    /// Loads the default document (required) and the alternate one, if configured.
    pub fn load(config: &Config) -> Result<Self> {
        let default = load_cv(&config.cv_data_path)?;
        let alt = config
            .cv_alt_data_path
            .as_deref()
            .map(load_cv)
            .transpose()?;
        Ok(Self { default, alt })
    }
}

/// Reads and parses one CV JSON file.
pub fn load_cv(path: impl AsRef<Path>) -> Result<CvData> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read CV data from '{}'", path.display()))?;
    let cv: CvData = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse CV data in '{}'", path.display()))?;
    info!(
        "Loaded CV data from {} ({} positions, {} projects)",
        path.display(),
        cv.experience.len(),
        cv.projects.len()
    );
    Ok(cv)
}
