//! Ordered media collection
//!
//! Product and combo forms edit one ordered list of media in which freshly
//! picked files (not yet uploaded) sit next to assets already persisted on
//! the backend. The collection owns that list: insertion, removal, reorder,
//! and the save payload all go through it, and it keeps every item's
//! position dense (`0..N-1`) after each mutation.

use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ALLOWED_IMAGE_TYPES;
use crate::models::RemoteAsset;

use super::preview::{PreviewHandle, PreviewStore};

/// Stable per-item token used for drag tracking and list diffing.
///
/// Unique within a collection instance for its whole lifetime; pending
/// uploads get a generated token, persisted assets derive theirs from the
/// backend id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey(String);

impl ItemKey {
    fn fresh() -> Self {
        Self(format!("upload-{}", Uuid::new_v4()))
    }

    fn for_asset(asset_id: i64) -> Self {
        Self(format!("asset-{}", asset_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// File picked by the operator, held in memory until save time.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub content: Bytes,
}

/// Which side of the upload boundary an item lives on.
#[derive(Debug, Clone)]
pub enum MediaOrigin {
    /// Local file waiting for the next save; `preview` must be released
    /// exactly once, when the item is removed or the collection is disposed.
    Pending {
        upload: FileUpload,
        preview: PreviewHandle,
    },
    /// Asset the backend already stores. The URL is stable and never revoked.
    Existing { asset_id: i64, remote_url: String },
}

/// One entry of the ordered list.
#[derive(Debug, Clone)]
pub struct MediaItem {
    key: ItemKey,
    origin: MediaOrigin,
    position: u32,
}

impl MediaItem {
    pub fn key(&self) -> &ItemKey {
        &self.key
    }

    pub fn origin(&self) -> &MediaOrigin {
        &self.origin
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.origin, MediaOrigin::Pending { .. })
    }

    /// Source string for rendering: the preview URI for pending items, the
    /// remote URL for persisted ones.
    pub fn display_source(&self) -> &str {
        match &self.origin {
            MediaOrigin::Pending { preview, .. } => preview.uri(),
            MediaOrigin::Existing { remote_url, .. } => remote_url,
        }
    }
}

/// Result of one `add_files` batch. Rejections surface as a single aggregate
/// notice, not one per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddOutcome {
    pub added: usize,
    pub rejected: usize,
}

impl AddOutcome {
    pub fn notice(&self) -> Option<String> {
        if self.rejected == 0 {
            None
        } else {
            Some(format!(
                "{} file(s) were not valid images and were skipped",
                self.rejected
            ))
        }
    }
}

/// Persisted asset kept through a save, with its final position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetainedAsset {
    pub id: i64,
    pub orders: u32,
}

/// Fresh upload with its final position.
#[derive(Debug, Clone)]
pub struct NewUpload {
    pub upload: FileUpload,
    pub orders: u32,
}

/// Everything a save request needs: uploads to send, assets to keep (with
/// their new sequence), and assets to delete.
#[derive(Debug, Clone, Default)]
pub struct SavePayload {
    pub new_uploads: Vec<NewUpload>,
    pub retained_existing: Vec<RetainedAsset>,
    pub removed_existing: Vec<i64>,
}

impl SavePayload {
    pub fn is_empty(&self) -> bool {
        self.new_uploads.is_empty()
            && self.retained_existing.is_empty()
            && self.removed_existing.is_empty()
    }

    /// JSON-encoded `[{id, orders}]` array for the retained assets, as the
    /// backend expects it in the multipart body.
    pub fn retained_json(&self) -> String {
        serde_json::to_string(&self.retained_existing).unwrap_or_default()
    }

    /// JSON-encoded array of removed asset ids.
    pub fn removed_json(&self) -> String {
        serde_json::to_string(&self.removed_existing).unwrap_or_default()
    }
}

/// Ordered, mixed-origin media list behind a product or combo form.
pub struct MediaCollection {
    items: Vec<MediaItem>,
    removed: Vec<i64>,
    previews: Arc<dyn PreviewStore>,
    disposed: bool,
}

impl MediaCollection {
    /// Empty collection for a create form.
    pub fn new(previews: Arc<dyn PreviewStore>) -> Self {
        Self {
            items: Vec::new(),
            removed: Vec::new(),
            previews,
            disposed: false,
        }
    }

    /// Collection pre-populated from a fetched record's assets, kept in the
    /// order given.
    pub fn from_existing(previews: Arc<dyn PreviewStore>, assets: &[RemoteAsset]) -> Self {
        let items = assets
            .iter()
            .enumerate()
            .map(|(index, asset)| MediaItem {
                key: ItemKey::for_asset(asset.id),
                origin: MediaOrigin::Existing {
                    asset_id: asset.id,
                    remote_url: asset.url.clone(),
                },
                position: index as u32,
            })
            .collect();

        Self {
            items,
            removed: Vec::new(),
            previews,
            disposed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Key of the item currently at `position`.
    pub fn key_at(&self, position: usize) -> Option<ItemKey> {
        self.items.get(position).map(|item| item.key.clone())
    }

    /// Key of the persisted asset with the given backend id, if still listed.
    pub fn asset_key(&self, asset_id: i64) -> Option<ItemKey> {
        self.items
            .iter()
            .find(|item| {
                matches!(item.origin, MediaOrigin::Existing { asset_id: id, .. } if id == asset_id)
            })
            .map(|item| item.key.clone())
    }

    /// Append the allow-listed files from a picked batch, each with a fresh
    /// preview handle. Files outside the image allow-list are skipped and
    /// counted in the outcome; the caller shows one notice for the batch.
    pub fn add_files(&mut self, files: Vec<FileUpload>) -> AddOutcome {
        let mut outcome = AddOutcome::default();

        for upload in files {
            if !ALLOWED_IMAGE_TYPES.contains(&upload.content_type.as_str()) {
                outcome.rejected += 1;
                continue;
            }

            let preview = self.previews.acquire(&upload.content);
            self.items.push(MediaItem {
                key: ItemKey::fresh(),
                origin: MediaOrigin::Pending { upload, preview },
                position: self.items.len() as u32,
            });
            outcome.added += 1;
        }

        if outcome.rejected > 0 {
            tracing::debug!(
                rejected = outcome.rejected,
                added = outcome.added,
                "skipped non-image files from picked batch"
            );
        }

        self.renumber();
        outcome
    }

    /// Remove an item. Persisted assets are queued for deletion on the next
    /// save; pending uploads just drop and release their preview. A stale
    /// key is a no-op, since drag layers can deliver events after rapid
    /// interaction.
    pub fn remove(&mut self, key: &ItemKey) {
        let Some(index) = self.index_of(key) else {
            return;
        };

        let item = self.items.remove(index);
        match item.origin {
            MediaOrigin::Existing { asset_id, .. } => self.removed.push(asset_id),
            MediaOrigin::Pending { preview, .. } => self.previews.release(&preview),
        }

        self.renumber();
    }

    /// Move the `from` item to the `to` item's slot; everything between
    /// shifts one slot toward the vacated position. Equal or unknown keys
    /// are a no-op. Call only for a drop on a valid target; a cancelled drag
    /// must not mutate.
    pub fn reorder(&mut self, from: &ItemKey, to: &ItemKey) {
        if from == to {
            return;
        }
        let (Some(from_index), Some(to_index)) = (self.index_of(from), self.index_of(to)) else {
            return;
        };

        let item = self.items.remove(from_index);
        self.items.insert(to_index, item);
        self.renumber();
    }

    /// Build the three lists a save request needs, reflecting the current
    /// visual order. Pure read; calling it twice without a mutation in
    /// between yields the same payload.
    pub fn save_payload(&self) -> SavePayload {
        let mut payload = SavePayload {
            removed_existing: self.removed.clone(),
            ..SavePayload::default()
        };

        for item in &self.items {
            match &item.origin {
                MediaOrigin::Pending { upload, .. } => payload.new_uploads.push(NewUpload {
                    upload: upload.clone(),
                    orders: item.position,
                }),
                MediaOrigin::Existing { asset_id, .. } => {
                    payload.retained_existing.push(RetainedAsset {
                        id: *asset_id,
                        orders: item.position,
                    })
                }
            }
        }

        payload
    }

    /// Release every pending preview still held. Called when the owning form
    /// goes away; safe to call once explicitly, the drop impl covers every
    /// other exit path.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        for item in &self.items {
            if let MediaOrigin::Pending { preview, .. } = &item.origin {
                self.previews.release(preview);
            }
        }
    }

    fn index_of(&self, key: &ItemKey) -> Option<usize> {
        self.items.iter().position(|item| &item.key == key)
    }

    fn renumber(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.position = index as u32;
        }
    }
}

impl Drop for MediaCollection {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::preview::InMemoryPreviewStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store that counts acquire/release calls on top of real bookkeeping.
    #[derive(Default)]
    struct CountingStore {
        inner: InMemoryPreviewStore,
        acquired: AtomicUsize,
        released: AtomicUsize,
    }

    impl PreviewStore for CountingStore {
        fn acquire(&self, content: &Bytes) -> PreviewHandle {
            self.acquired.fetch_add(1, Ordering::SeqCst);
            self.inner.acquire(content)
        }

        fn release(&self, handle: &PreviewHandle) {
            self.released.fetch_add(1, Ordering::SeqCst);
            self.inner.release(handle);
        }

        fn resolve(&self, token: Uuid) -> Option<Bytes> {
            self.inner.resolve(token)
        }
    }

    fn image(name: &str) -> FileUpload {
        FileUpload {
            file_name: name.to_string(),
            content_type: "image/png".to_string(),
            content: Bytes::from(name.as_bytes().to_vec()),
        }
    }

    fn assets(ids: &[i64]) -> Vec<RemoteAsset> {
        ids.iter()
            .enumerate()
            .map(|(index, id)| RemoteAsset {
                id: *id,
                url: format!("https://cdn.example.test/media/{}.jpg", id),
                orders: index as u32,
            })
            .collect()
    }

    fn positions(collection: &MediaCollection) -> Vec<u32> {
        collection.items().iter().map(|i| i.position()).collect()
    }

    #[test]
    fn positions_stay_dense_through_mutations() {
        let store = Arc::new(InMemoryPreviewStore::new());
        let mut collection = MediaCollection::from_existing(store, &assets(&[10, 11]));

        collection.add_files(vec![image("a.png"), image("b.png"), image("c.png")]);
        assert_eq!(positions(&collection), vec![0, 1, 2, 3, 4]);

        let b = collection.key_at(3).unwrap();
        collection.remove(&b);
        assert_eq!(positions(&collection), vec![0, 1, 2, 3]);

        let first = collection.key_at(0).unwrap();
        let last = collection.key_at(3).unwrap();
        collection.reorder(&last, &first);
        assert_eq!(positions(&collection), vec![0, 1, 2, 3]);
    }

    #[test]
    fn add_appends_at_end() {
        let store = Arc::new(InMemoryPreviewStore::new());
        let mut collection = MediaCollection::from_existing(store, &assets(&[10, 11]));

        let outcome = collection.add_files(vec![image("imgA.png")]);
        assert_eq!(outcome, AddOutcome { added: 1, rejected: 0 });
        assert!(outcome.notice().is_none());
        assert_eq!(collection.len(), 3);

        let payload = collection.save_payload();
        assert_eq!(payload.new_uploads.len(), 1);
        assert_eq!(payload.new_uploads[0].orders, 2);
        assert_eq!(payload.new_uploads[0].upload.file_name, "imgA.png");
        assert_eq!(
            payload.retained_existing,
            vec![
                RetainedAsset { id: 10, orders: 0 },
                RetainedAsset { id: 11, orders: 1 }
            ]
        );
        assert!(payload.removed_existing.is_empty());
    }

    #[test]
    fn reorder_moves_upload_to_front() {
        let store = Arc::new(InMemoryPreviewStore::new());
        let mut collection = MediaCollection::from_existing(store, &assets(&[10, 11]));
        collection.add_files(vec![image("imgA.png")]);

        let upload_key = collection.key_at(2).unwrap();
        let front_key = collection.asset_key(10).unwrap();
        collection.reorder(&upload_key, &front_key);

        assert!(collection.items()[0].is_pending());
        let payload = collection.save_payload();
        assert_eq!(payload.new_uploads[0].orders, 0);
        assert_eq!(
            payload.retained_existing,
            vec![
                RetainedAsset { id: 10, orders: 1 },
                RetainedAsset { id: 11, orders: 2 }
            ]
        );
    }

    #[test]
    fn reorder_is_undone_by_matching_inverse() {
        let store = Arc::new(InMemoryPreviewStore::new());
        let mut collection = MediaCollection::from_existing(store, &assets(&[1, 2, 3]));

        let keys: Vec<ItemKey> = (0..3).map(|i| collection.key_at(i).unwrap()).collect();
        collection.reorder(&keys[0], &keys[2]);
        assert_eq!(collection.key_at(2).unwrap(), keys[0]);

        // Move it back to the slot now held by its old neighbor
        collection.reorder(&keys[0], &keys[1]);
        let restored: Vec<ItemKey> = (0..3).map(|i| collection.key_at(i).unwrap()).collect();
        assert_eq!(restored, keys);
    }

    #[test]
    fn reorder_with_stale_or_equal_keys_is_a_noop() {
        let store = Arc::new(InMemoryPreviewStore::new());
        let mut collection = MediaCollection::from_existing(store.clone(), &assets(&[1, 2]));
        let gone = {
            let mut other = MediaCollection::new(store);
            other.add_files(vec![image("x.png")]);
            other.key_at(0).unwrap()
        };

        let before: Vec<ItemKey> = (0..2).map(|i| collection.key_at(i).unwrap()).collect();
        collection.reorder(&gone, &before[0]);
        collection.reorder(&before[0], &before[0]);

        let after: Vec<ItemKey> = (0..2).map(|i| collection.key_at(i).unwrap()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn removing_existing_queues_deletion() {
        let store = Arc::new(InMemoryPreviewStore::new());
        let mut collection = MediaCollection::from_existing(store, &assets(&[10, 11]));
        collection.add_files(vec![image("imgA.png")]);

        collection.remove(&collection.asset_key(10).unwrap());

        let payload = collection.save_payload();
        assert_eq!(payload.removed_existing, vec![10]);
        assert_eq!(payload.retained_existing, vec![RetainedAsset { id: 11, orders: 0 }]);
        assert_eq!(payload.new_uploads[0].orders, 1);
        assert!(payload
            .retained_existing
            .iter()
            .all(|retained| retained.id != 10));
    }

    #[test]
    fn removing_pending_releases_exactly_one_preview() {
        let store = Arc::new(CountingStore::default());
        let mut collection = MediaCollection::new(store.clone());
        collection.add_files(vec![image("a.png"), image("b.png")]);

        let first = collection.key_at(0).unwrap();
        collection.remove(&first);

        assert_eq!(store.acquired.load(Ordering::SeqCst), 2);
        assert_eq!(store.released.load(Ordering::SeqCst), 1);
        assert_eq!(collection.save_payload().new_uploads.len(), 1);
        assert!(collection.save_payload().removed_existing.is_empty());
    }

    #[test]
    fn removing_unknown_key_is_a_noop() {
        let store = Arc::new(InMemoryPreviewStore::new());
        let mut collection = MediaCollection::from_existing(store.clone(), &assets(&[1]));
        let stale = {
            let mut other = MediaCollection::new(store);
            other.add_files(vec![image("x.png")]);
            other.key_at(0).unwrap()
        };

        collection.remove(&stale);
        assert_eq!(collection.len(), 1);
        assert!(collection.save_payload().removed_existing.is_empty());
    }

    #[test]
    fn rejected_files_produce_one_aggregate_notice() {
        let store = Arc::new(CountingStore::default());
        let mut collection = MediaCollection::new(store.clone());

        let outcome = collection.add_files(vec![
            FileUpload {
                file_name: "doc.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                content: Bytes::from_static(b"%PDF"),
            },
            FileUpload {
                file_name: "notes.txt".to_string(),
                content_type: "text/plain".to_string(),
                content: Bytes::from_static(b"hi"),
            },
        ]);

        assert_eq!(outcome, AddOutcome { added: 0, rejected: 2 });
        assert!(outcome.notice().unwrap().contains("2 file(s)"));
        assert!(collection.is_empty());
        // No preview was ever acquired for a rejected file
        assert_eq!(store.acquired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn save_payload_is_idempotent() {
        let store = Arc::new(InMemoryPreviewStore::new());
        let mut collection = MediaCollection::from_existing(store, &assets(&[5, 6]));
        collection.add_files(vec![image("a.png")]);
        collection.remove(&collection.asset_key(5).unwrap());

        let first = collection.save_payload();
        let second = collection.save_payload();
        assert_eq!(first.retained_existing, second.retained_existing);
        assert_eq!(first.removed_existing, second.removed_existing);
        assert_eq!(first.new_uploads.len(), second.new_uploads.len());
        for (a, b) in first.new_uploads.iter().zip(second.new_uploads.iter()) {
            assert_eq!(a.orders, b.orders);
            assert_eq!(a.upload.file_name, b.upload.file_name);
        }
    }

    #[test]
    fn dispose_releases_each_pending_preview_once() {
        let store = Arc::new(CountingStore::default());
        let mut collection = MediaCollection::from_existing(store.clone(), &assets(&[10]));
        collection.add_files(vec![image("a.png"), image("b.png"), image("c.png")]);

        collection.dispose();
        assert_eq!(store.released.load(Ordering::SeqCst), 3);

        // Explicit dispose plus drop must not double-release
        drop(collection);
        assert_eq!(store.released.load(Ordering::SeqCst), 3);
        assert_eq!(store.inner.active(), 0);
    }

    #[test]
    fn drop_alone_releases_pending_previews() {
        let store = Arc::new(CountingStore::default());
        {
            let mut collection = MediaCollection::new(store.clone());
            collection.add_files(vec![image("a.png")]);
        }
        assert_eq!(store.released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn retained_json_matches_backend_shape() {
        let payload = SavePayload {
            new_uploads: Vec::new(),
            retained_existing: vec![
                RetainedAsset { id: 10, orders: 0 },
                RetainedAsset { id: 11, orders: 1 },
            ],
            removed_existing: vec![12],
        };

        assert_eq!(
            payload.retained_json(),
            r#"[{"id":10,"orders":0},{"id":11,"orders":1}]"#
        );
        assert_eq!(payload.removed_json(), "[12]");
    }
}
