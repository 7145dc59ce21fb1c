//! Infrastructure layer - content document loading and file-backed repositories

pub mod content_loader;
pub mod persistence;

pub use content_loader::ContentLoader;
pub use persistence::FileContentRepository;
