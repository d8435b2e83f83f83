use serde_json::{json, Value};

use crate::http::{routes, ApiError};
use crate::model::{Conversation, ConversationCreated, ConversationList, EntityId, MessageList};
use crate::store::messages::MessagesIntent;

use super::{tags, Dispatcher};

impl Dispatcher {
    pub async fn get_all_conversations(&self) -> Result<ConversationList, ApiError> {
        let auth = self.auth();
        self.run(
            tags::GET_ALL_CONVERSATIONS,
            |o| MessagesIntent::GetConversations(o).into(),
            self.api.get(&routes::CONVERSATIONS, &auth, &[]),
        )
        .await
    }

    pub async fn create_conversation(
        &self,
        other_user: &EntityId,
    ) -> Result<ConversationCreated, ApiError> {
        let auth = self.auth();
        let body = json!({ "user2Id": other_user.to_json() });
        self.run(
            tags::CREATE_CONVERSATION,
            |o| MessagesIntent::CreateConversation(o).into(),
            self.api.post(&routes::CONVERSATIONS, &auth, &body),
        )
        .await
    }

    pub async fn get_all_messages(&self, conversation_id: &EntityId) -> Result<MessageList, ApiError> {
        let auth = self.auth();
        let path = routes::conversation(conversation_id);
        self.run(
            tags::GET_ALL_MESSAGES,
            |o| MessagesIntent::GetMessages(o).into(),
            self.api.get(&path, &auth, &[]),
        )
        .await
    }

    /// Send a message, then reload the conversation.
    pub async fn send_message(
        &self,
        conversation_id: &EntityId,
        content: &str,
    ) -> Result<Value, ApiError> {
        let auth = self.auth();
        let path = routes::conversation(conversation_id);
        let body = json!({ "content": content });
        let sent = self
            .run(
                tags::SEND_MESSAGE,
                |o| MessagesIntent::Send(o).into(),
                self.api.post(&path, &auth, &body),
            )
            .await?;

        self.refetch(tags::GET_ALL_MESSAGES, self.get_all_messages(conversation_id))
            .await;
        Ok(sent)
    }

    pub fn select_conversation(&self, conversation_id: Option<EntityId>) {
        self.store
            .dispatch(MessagesIntent::SetSelectedConversation(conversation_id));
    }

    /// Open a conversation with another account and make it the current one.
    ///
    /// Creates it, reloads the conversation list, selects it and loads its
    /// messages. Returns `None` when the server acknowledged the request
    /// without describing the new conversation.
    pub async fn start_conversation(
        &self,
        other_user: &EntityId,
    ) -> Result<Option<Conversation>, ApiError> {
        let created = self.create_conversation(other_user).await?;
        self.refetch(tags::GET_ALL_CONVERSATIONS, self.get_all_conversations())
            .await;

        let Some(conversation) = created.conversation else {
            tracing::warn!(user = %other_user, "conversation created without a body");
            return Ok(None);
        };

        self.select_conversation(Some(conversation.id.clone()));
        self.refetch(tags::GET_ALL_MESSAGES, self.get_all_messages(&conversation.id))
            .await;
        Ok(Some(conversation))
    }
}
