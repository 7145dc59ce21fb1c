//! File-based repository implementations

mod file_content_repo;

pub use file_content_repo::FileContentRepository;
