//! Messaging thread endpoints

use reqwest::Method;
use uuid::Uuid;

use shared::{MessageThread, NewMessage, ThreadMessage};

use crate::error::ApiResult;

use super::MarketplaceClient;

impl MarketplaceClient {
    /// Threads the current user participates in
    pub async fn threads(&self) -> ApiResult<Vec<MessageThread>> {
        self.authorized_get("threads/", &[]).await
    }

    pub async fn thread_messages(&self, thread_id: Uuid) -> ApiResult<Vec<ThreadMessage>> {
        self.authorized_get(&format!("threads/{}/messages/", thread_id), &[])
            .await
    }

    pub async fn send_message(
        &self,
        thread_id: Uuid,
        message: &NewMessage,
    ) -> ApiResult<ThreadMessage> {
        self.authorized_json(
            Method::POST,
            &format!("threads/{}/messages/", thread_id),
            message,
        )
        .await
    }
}
