//! File-based implementation of ContentRepository

use std::path::{Path, PathBuf};

use yardstick_domain::repository::ContentRepository;
use yardstick_domain::{CalculatorSettings, Material, SiteContent};
use yardstick_types::Error;

use crate::content_loader::ContentLoader;

/// Content repository backed by the CMS content file
///
/// The file is read once on construction; call [`reload`](Self::reload) to
/// pick up edits made through the CMS.
pub struct FileContentRepository {
    path: PathBuf,
    content: SiteContent,
}

impl FileContentRepository {
    /// Open the repository, reading the file immediately
    pub fn open(path: PathBuf) -> Result<Self, Error> {
        let content = ContentLoader::load_from_file(&path)?;
        Ok(Self { path, content })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loaded content snapshot
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Re-read the content file
    pub fn reload(&mut self) -> Result<(), Error> {
        self.content = ContentLoader::load_from_file(&self.path)?;
        Ok(())
    }
}

impl ContentRepository for FileContentRepository {
    fn find_materials(&self) -> Result<Vec<Material>, Error> {
        Ok(self.content.materials.clone())
    }

    fn calculator_settings(&self) -> Result<CalculatorSettings, Error> {
        Ok(self.content.calculators.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_materials_and_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(
            &path,
            r#"{"materials":[{"id":"a","densityLbPerFt3":120}],
               "calculators":{"concrete":{"defaultWastePct":7}}}"#,
        )
        .unwrap();

        let repo = FileContentRepository::open(path.clone()).unwrap();
        assert_eq!(repo.path(), path.as_path());
        let materials = repo.find_materials().unwrap();
        assert_eq!(materials.len(), 1);
        assert_eq!(materials[0].id.as_deref(), Some("a"));
        let settings = repo.calculator_settings().unwrap();
        assert_eq!(settings.concrete_waste_percent(), 7.0);
        assert_eq!(settings.aggregate_waste_percent(), 10.0);
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, r#"{"materials":[]}"#).unwrap();

        let mut repo = FileContentRepository::open(path.clone()).unwrap();
        assert!(repo.find_materials().unwrap().is_empty());

        std::fs::write(&path, r#"{"materials":[{"id":"b","densityTonsPerCY":1.4}]}"#).unwrap();
        repo.reload().unwrap();
        assert_eq!(repo.find_materials().unwrap().len(), 1);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let repo = FileContentRepository::open(dir.path().join("content.json")).unwrap();
        assert!(repo.content().materials.is_empty());
    }

    #[test]
    fn test_open_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(FileContentRepository::open(path).is_err());
    }
}
