//! Combo product endpoints.

use anyhow::Result;

use shopdesk_core::media::SavePayload;
use shopdesk_core::models::{ComboDraft, ComboProduct, Page, PageQuery};

use crate::forms::save_form;
use crate::{api_prefix, ApiClient};

impl ApiClient {
    pub async fn list_combos(&self, page: PageQuery) -> Result<Page<ComboProduct>> {
        self.get(&format!("{}/combo-products", api_prefix()), &page.to_query())
            .await
    }

    pub async fn get_combo(&self, combo_id: i64) -> Result<ComboProduct> {
        self.get(&format!("{}/combo-products/{}", api_prefix(), combo_id), &[])
            .await
    }

    pub async fn create_combo(
        &self,
        draft: &ComboDraft,
        media: &SavePayload,
    ) -> Result<ComboProduct> {
        let form = save_form(&draft.form_fields(), media)?;
        self.post_multipart(&format!("{}/combo-products", api_prefix()), form)
            .await
    }

    pub async fn update_combo(
        &self,
        combo_id: i64,
        draft: &ComboDraft,
        media: &SavePayload,
    ) -> Result<ComboProduct> {
        let form = save_form(&draft.form_fields(), media)?;
        self.post_multipart_update(
            &format!("{}/combo-products/{}", api_prefix(), combo_id),
            form,
        )
        .await
    }

    pub async fn delete_combo(&self, combo_id: i64) -> Result<()> {
        self.delete(&format!("{}/combo-products/{}", api_prefix(), combo_id))
            .await
    }
}
