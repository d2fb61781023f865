//! Drag session
//!
//! The pointer/keyboard layer reports start, drop, and cancel with item
//! keys; this state machine turns those into at most one `reorder` per
//! completed drag. A cancelled drag, or a drop outside any valid target,
//! never mutates the collection.

use super::collection::{ItemKey, MediaCollection};

/// Read-only preview shown while an item is in flight. It reuses the dragged
/// item's existing display source and holds no handle of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragOverlay {
    pub key: ItemKey,
    pub display_source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging { active: ItemKey },
}

/// One drag gesture at a time: `Idle -> Dragging -> Idle`.
#[derive(Debug, Clone)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn active(&self) -> Option<&ItemKey> {
        match &self.state {
            DragState::Dragging { active } => Some(active),
            DragState::Idle => None,
        }
    }

    /// Enter `Dragging` for the given item and return the overlay to render.
    /// A start for an unknown key, or while another drag is in flight, is
    /// ignored (stale events from rapid interaction).
    pub fn begin(&mut self, key: &ItemKey, collection: &MediaCollection) -> Option<DragOverlay> {
        if self.is_dragging() {
            return None;
        }

        let item = collection.items().iter().find(|item| item.key() == key)?;
        self.state = DragState::Dragging { active: key.clone() };

        Some(DragOverlay {
            key: key.clone(),
            display_source: item.display_source().to_string(),
        })
    }

    /// Complete the gesture on a valid drop target: reorder, then return to
    /// `Idle`. A drop without an active drag is ignored.
    pub fn drop_on(&mut self, target: &ItemKey, collection: &mut MediaCollection) {
        let DragState::Dragging { active } = std::mem::replace(&mut self.state, DragState::Idle)
        else {
            return;
        };
        collection.reorder(&active, target);
    }

    /// Abandon the gesture without touching the collection.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::collection::{FileUpload, MediaCollection};
    use crate::media::preview::InMemoryPreviewStore;
    use crate::models::RemoteAsset;
    use bytes::Bytes;
    use std::sync::Arc;

    fn collection_with(ids: &[i64]) -> MediaCollection {
        let assets: Vec<RemoteAsset> = ids
            .iter()
            .enumerate()
            .map(|(index, id)| RemoteAsset {
                id: *id,
                url: format!("https://cdn.example.test/media/{}.jpg", id),
                orders: index as u32,
            })
            .collect();
        MediaCollection::from_existing(Arc::new(InMemoryPreviewStore::new()), &assets)
    }

    #[test]
    fn drop_reorders_and_returns_to_idle() {
        let mut collection = collection_with(&[1, 2, 3]);
        let mut session = DragSession::new();

        let last = collection.key_at(2).unwrap();
        let first = collection.key_at(0).unwrap();

        let overlay = session.begin(&last, &collection).unwrap();
        assert_eq!(overlay.key, last);
        assert!(session.is_dragging());

        session.drop_on(&first, &mut collection);
        assert!(!session.is_dragging());
        assert_eq!(collection.key_at(0).unwrap(), last);
    }

    #[test]
    fn cancel_leaves_collection_untouched() {
        let collection = collection_with(&[1, 2]);
        let mut session = DragSession::new();
        let before: Vec<_> = (0..2).map(|i| collection.key_at(i).unwrap()).collect();

        session.begin(&before[1], &collection);
        session.cancel();
        assert!(!session.is_dragging());

        let after: Vec<_> = (0..2).map(|i| collection.key_at(i).unwrap()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn overlay_reuses_existing_display_source() {
        let collection = collection_with(&[7]);
        let store = Arc::new(InMemoryPreviewStore::new());
        let mut with_upload = MediaCollection::new(store.clone());
        with_upload.add_files(vec![FileUpload {
            file_name: "a.png".to_string(),
            content_type: "image/png".to_string(),
            content: Bytes::from_static(b"a"),
        }]);

        let mut session = DragSession::new();
        let key = collection.key_at(0).unwrap();
        let overlay = session.begin(&key, &collection).unwrap();
        assert_eq!(overlay.display_source, "https://cdn.example.test/media/7.jpg");
        session.cancel();

        // Pending items lend their preview URI; nothing new is acquired
        let upload_key = with_upload.key_at(0).unwrap();
        let live_before = store.active();
        let overlay = session.begin(&upload_key, &with_upload).unwrap();
        assert!(overlay.display_source.starts_with("preview://"));
        assert_eq!(store.active(), live_before);
    }

    #[test]
    fn stale_or_nested_starts_are_ignored() {
        let collection = collection_with(&[1, 2]);
        let mut session = DragSession::new();
        let stale = {
            let mut other = collection_with(&[9]);
            let key = other.key_at(0).unwrap();
            other.remove(&key);
            key
        };

        assert!(session.begin(&stale, &collection).is_none());
        assert!(!session.is_dragging());

        let key = collection.key_at(0).unwrap();
        session.begin(&key, &collection).unwrap();
        assert!(session.begin(&key, &collection).is_none());
    }

    #[test]
    fn drop_without_active_drag_is_ignored() {
        let mut collection = collection_with(&[1, 2]);
        let mut session = DragSession::new();
        let before: Vec<_> = (0..2).map(|i| collection.key_at(i).unwrap()).collect();

        session.drop_on(&before[0], &mut collection);

        let after: Vec<_> = (0..2).map(|i| collection.key_at(i).unwrap()).collect();
        assert_eq!(before, after);
    }
}
