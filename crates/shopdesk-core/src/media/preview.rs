//! Preview handle store
//!
//! A pending upload needs a displayable source before the file ever reaches
//! the backend. The store hands out revocable handles for in-memory file
//! payloads; a handle stays resolvable until it is released, and every
//! acquired handle must be released exactly once.

use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;
use uuid::Uuid;

/// Revocable display handle for a not-yet-uploaded file.
///
/// The handle itself is plain data; the entry it points at is owned by the
/// `PreviewStore` that issued it. Resolving a released handle yields nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle {
    token: Uuid,
    uri: String,
}

impl PreviewHandle {
    pub fn token(&self) -> Uuid {
        self.token
    }

    /// Source string the rendering layer points an image element at.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Issues and revokes preview handles.
///
/// The collection calls `acquire` when a file is picked and `release` when
/// the item is removed, replaced, or the owning form is torn down. Alternate
/// implementations (temp-file backed, counting test doubles) plug in here.
pub trait PreviewStore: Send + Sync {
    /// Register `content` and return a fresh handle for it.
    fn acquire(&self, content: &Bytes) -> PreviewHandle;

    /// Revoke a handle. Releasing an unknown or already-released handle is a
    /// no-op; the caller guarantees single release per acquire.
    fn release(&self, handle: &PreviewHandle);

    /// Resolve a handle back to its payload, if still live.
    fn resolve(&self, token: Uuid) -> Option<Bytes>;
}

/// In-memory store keyed by handle token.
#[derive(Debug, Default)]
pub struct InMemoryPreviewStore {
    entries: Mutex<HashMap<Uuid, Bytes>>,
}

impl InMemoryPreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unreleased) handles.
    pub fn active(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}

impl PreviewStore for InMemoryPreviewStore {
    fn acquire(&self, content: &Bytes) -> PreviewHandle {
        let token = Uuid::new_v4();
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(token, content.clone());
        }
        PreviewHandle {
            token,
            uri: format!("preview://{}", token),
        }
    }

    fn release(&self, handle: &PreviewHandle) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.remove(&handle.token).is_none() {
                tracing::debug!(token = %handle.token, "released a handle that was not live");
            }
        }
    }

    fn resolve(&self, token: Uuid) -> Option<Bytes> {
        self.entries.lock().ok().and_then(|e| e.get(&token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_then_resolve() {
        let store = InMemoryPreviewStore::new();
        let content = Bytes::from_static(b"fake image bytes");
        let handle = store.acquire(&content);

        assert_eq!(store.active(), 1);
        assert_eq!(store.resolve(handle.token()), Some(content));
        assert!(handle.uri().starts_with("preview://"));
    }

    #[test]
    fn release_revokes_handle() {
        let store = InMemoryPreviewStore::new();
        let handle = store.acquire(&Bytes::from_static(b"x"));

        store.release(&handle);
        assert_eq!(store.active(), 0);
        assert_eq!(store.resolve(handle.token()), None);
    }

    #[test]
    fn double_release_is_a_noop() {
        let store = InMemoryPreviewStore::new();
        let first = store.acquire(&Bytes::from_static(b"a"));
        let second = store.acquire(&Bytes::from_static(b"b"));

        store.release(&first);
        store.release(&first);
        assert_eq!(store.active(), 1);
        assert!(store.resolve(second.token()).is_some());
    }

    #[test]
    fn handles_are_unique() {
        let store = InMemoryPreviewStore::new();
        let a = store.acquire(&Bytes::from_static(b"same"));
        let b = store.acquire(&Bytes::from_static(b"same"));
        assert_ne!(a.token(), b.token());
    }
}
