//! Site content loader (content.json written by the CMS, or a TOML catalog)

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use yardstick_domain::SiteContent;
use yardstick_types::{ContentError, Error, Result};

/// Loads [`SiteContent`] from disk or from strings
pub struct ContentLoader;

impl ContentLoader {
    /// Load content from a file
    ///
    /// Files ending in `.toml` are parsed as TOML, everything else as JSON.
    /// A missing file yields empty content: the CMS has not saved anything yet.
    pub fn load_from_file(path: &Path) -> Result<SiteContent> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "content file not found; using empty content");
                return Ok(SiteContent::default());
            }
            Err(e) => {
                return Err(Error::Content(ContentError::Unreadable {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }))
            }
        };

        let loaded = if is_toml(path) {
            Self::load_from_toml_str(&content)?
        } else {
            Self::load_from_json_str(&content)?
        };

        tracing::debug!(
            path = %path.display(),
            materials = loaded.materials.len(),
            "loaded site content"
        );
        Ok(loaded)
    }

    /// Parse the CMS JSON document
    pub fn load_from_json_str(json: &str) -> Result<SiteContent> {
        serde_json::from_str(json)
            .map_err(|e| Error::Content(ContentError::InvalidJson(e.to_string())))
    }

    /// Parse a hand-maintained TOML catalog (`[[materials]]` tables)
    pub fn load_from_toml_str(toml_content: &str) -> Result<SiteContent> {
        toml::from_str(toml_content)
            .map_err(|e| Error::Content(ContentError::InvalidToml(e.to_string())))
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
