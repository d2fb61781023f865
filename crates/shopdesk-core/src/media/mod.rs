//! Ordered media editing
//!
//! The reorderable media grid behind product and combo forms: an ordered
//! list mixing pending uploads with persisted assets, a drag state machine
//! driving reorders, and a revocable preview-handle store for the uploads.

pub mod collection;
pub mod drag;
pub mod preview;

pub use collection::{
    AddOutcome, FileUpload, ItemKey, MediaCollection, MediaItem, MediaOrigin, NewUpload,
    RetainedAsset, SavePayload,
};
pub use drag::{DragOverlay, DragSession};
pub use preview::{InMemoryPreviewStore, PreviewHandle, PreviewStore};
