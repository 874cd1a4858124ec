/*
[INPUT]:  Outgoing message fields and history filters
[OUTPUT]: Send receipts and message history pages
[POS]:    HTTP layer - messaging endpoints
[UPDATE]: When adding message endpoints or changing the agent block
*/

use crate::http::{Result, SolapiClient};
use crate::types::{
    Agent, MessageList, MessageListQuery, OutgoingMessage, SendMessageRequest,
    SendMessageResponse,
};

impl SolapiClient {
    /// Send a single message
    ///
    /// POST messages/v4/send
    pub async fn send_message(&self, message: OutgoingMessage) -> Result<SendMessageResponse> {
        let body = SendMessageRequest {
            message,
            agent: self.agent(),
        };
        self.post("messages/v4/send", &body).await
    }

    /// Query message history
    ///
    /// GET messages/v4/list
    pub async fn get_message_list(&self, query: &MessageListQuery) -> Result<MessageList> {
        self.get("messages/v4/list", query).await
    }

    fn agent(&self) -> Agent {
        let config = self.config();
        Agent {
            sdk_version: config.sdk_version().to_string(),
            os_platform: config.os_platform().to_string(),
            app_id: config.app_id().map(str::to_string),
        }
    }
}
