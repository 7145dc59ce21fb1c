//! Repository adapters for the content store

use std::path::PathBuf;

use yardstick_infra::FileContentRepository;
use yardstick_types::Result;

use crate::config::Config;

/// Open the content repository configured in `config`
pub fn open_content_repo(config: &Config) -> Result<FileContentRepository> {
    open_content_repo_at(config.content_path()?)
}

/// Open a content repository at a custom path
pub fn open_content_repo_at(path: PathBuf) -> Result<FileContentRepository> {
    FileContentRepository::open(path)
}
