//! Multipart body assembly for record saves that carry media.
//!
//! The backend expects `media[i][file]` + `media[i][orders]` parts for each
//! new upload, a JSON-encoded `[{id, orders}]` array for the assets kept,
//! and a JSON-encoded id array for the assets removed, next to the record's
//! scalar fields.

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};

use shopdesk_core::media::SavePayload;

/// Build the multipart form for a create/update that includes media.
/// `fields` are the record's scalar form fields (from a draft's
/// `form_fields()`), `media` is the collection's save payload.
pub fn save_form(fields: &[(String, String)], media: &SavePayload) -> Result<Form> {
    let mut form = Form::new();

    for (name, value) in fields {
        form = form.text(name.clone(), value.clone());
    }

    for (index, new_upload) in media.new_uploads.iter().enumerate() {
        let part = Part::bytes(new_upload.upload.content.to_vec())
            .file_name(new_upload.upload.file_name.clone())
            .mime_str(&new_upload.upload.content_type)
            .with_context(|| {
                format!(
                    "Invalid content type for {}",
                    new_upload.upload.file_name
                )
            })?;
        form = form
            .part(format!("media[{}][file]", index), part)
            .text(format!("media[{}][orders]", index), new_upload.orders.to_string());
    }

    form = form
        .text("existing_media", media.retained_json())
        .text("removed_media", media.removed_json());

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use shopdesk_core::media::{FileUpload, NewUpload, RetainedAsset};

    fn payload() -> SavePayload {
        SavePayload {
            new_uploads: vec![NewUpload {
                upload: FileUpload {
                    file_name: "imgA.png".to_string(),
                    content_type: "image/png".to_string(),
                    content: Bytes::from_static(b"png-bytes"),
                },
                orders: 2,
            }],
            retained_existing: vec![
                RetainedAsset { id: 10, orders: 0 },
                RetainedAsset { id: 11, orders: 1 },
            ],
            removed_existing: vec![12],
        }
    }

    #[test]
    fn save_form_builds() {
        let fields = vec![("name".to_string(), "Linen shirt".to_string())];
        assert!(save_form(&fields, &payload()).is_ok());
    }

    #[test]
    fn save_form_rejects_malformed_content_type() {
        let mut media = payload();
        media.new_uploads[0].upload.content_type = "not a mime".to_string();
        assert!(save_form(&[], &media).is_err());
    }

    #[test]
    fn empty_payload_still_sends_media_arrays() {
        // The backend reads both arrays on every save so an untouched media
        // grid still persists its (empty) state
        let form = save_form(&[], &SavePayload::default());
        assert!(form.is_ok());
    }
}
