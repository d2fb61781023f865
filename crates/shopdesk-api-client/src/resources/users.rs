//! User and review endpoints.

use anyhow::Result;

use shopdesk_core::models::{Page, PageQuery, Review, User};

use crate::{api_prefix, ApiClient};

impl ApiClient {
    pub async fn list_users(&self, page: PageQuery) -> Result<Page<User>> {
        self.get(&format!("{}/users", api_prefix()), &page.to_query())
            .await
    }

    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        self.get(&format!("{}/users/{}", api_prefix(), user_id), &[])
            .await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<()> {
        self.delete(&format!("{}/users/{}", api_prefix(), user_id))
            .await
    }

    /// List reviews, optionally only those awaiting moderation.
    pub async fn list_reviews(
        &self,
        page: PageQuery,
        pending_only: bool,
    ) -> Result<Page<Review>> {
        let mut query = page.to_query();
        if pending_only {
            query.push(("approved", "0".to_string()));
        }
        self.get(&format!("{}/reviews", api_prefix()), &query).await
    }

    pub async fn approve_review(&self, review_id: i64) -> Result<Review> {
        self.post_action(&format!("{}/reviews/{}/approve", api_prefix(), review_id))
            .await
    }

    pub async fn delete_review(&self, review_id: i64) -> Result<()> {
        self.delete(&format!("{}/reviews/{}", api_prefix(), review_id))
            .await
    }
}
