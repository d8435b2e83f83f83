use crate::model::EntityId;
use crate::mvi::Intent;

use super::candidates::ConversationCandidate;

#[derive(Debug, Clone)]
pub enum MessagesPageIntent {
    ToggleModal,
    OpenModal,
    CloseModal,
    SetSearchData(Vec<ConversationCandidate>),
    ToggleChatMode,
    SetChatMode(bool),
    SetValue(Option<EntityId>),
    SelectConversation(Option<EntityId>),
    /// A conversation with `user` was opened from the picker. Drops the
    /// account from the picker, selects the conversation, switches to the
    /// chat view and closes the modal.
    ConversationStarted {
        user: EntityId,
        conversation: Option<EntityId>,
    },
}

impl Intent for MessagesPageIntent {}
