//! Shopdesk Core Library
//!
//! This crate provides the domain models, error types, configuration, and the
//! ordered media collection that are shared across all Shopdesk components.

pub mod config;
pub mod error;
pub mod labels;
pub mod media;
pub mod models;
pub mod session;

// Re-export commonly used types
pub use config::AdminConfig;
pub use error::{AppError, LogLevel, NoticeMetadata};
pub use media::{
    AddOutcome, DragOverlay, DragSession, FileUpload, InMemoryPreviewStore, ItemKey,
    MediaCollection, MediaItem, MediaOrigin, PreviewHandle, PreviewStore, SavePayload,
};
pub use session::SessionStore;
