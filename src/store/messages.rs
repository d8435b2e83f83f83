//! Conversations and the messages of the selected one.
//!
//! The two lists load independently, so each has its own status.

use crate::model::{Conversation, ConversationCreated, ConversationList, EntityId, Message, MessageList};
use crate::mvi::{Intent, Reducer, StoreState};
use crate::store::{FetchStatus, Outcome};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessagesState {
    pub conversation_status: FetchStatus,
    pub message_status: FetchStatus,
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
    pub selected_conversation: Option<EntityId>,
}

impl StoreState for MessagesState {}

#[derive(Debug, Clone)]
pub enum MessagesIntent {
    GetConversations(Outcome<ConversationList>),
    CreateConversation(Outcome<ConversationCreated>),
    GetMessages(Outcome<MessageList>),
    Send(Outcome<serde_json::Value>),
    SetSelectedConversation(Option<EntityId>),
}

impl Intent for MessagesIntent {}

pub struct MessagesReducer;

impl Reducer for MessagesReducer {
    type State = MessagesState;
    type Intent = MessagesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MessagesIntent::GetConversations(outcome) => {
                state.conversation_status = outcome.status();
                if let Outcome::Fulfilled(list) = outcome {
                    state.conversations = list.conversations;
                }
            }
            MessagesIntent::CreateConversation(outcome) => {
                state.conversation_status = outcome.status();
            }
            MessagesIntent::GetMessages(outcome) => {
                state.message_status = outcome.status();
                if let Outcome::Fulfilled(list) = outcome {
                    state.messages = list.messages;
                }
            }
            MessagesIntent::Send(outcome) => state.message_status = outcome.status(),
            MessagesIntent::SetSelectedConversation(id) => state.selected_conversation = id,
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_independent() {
        let state = MessagesReducer::reduce(
            MessagesState::default(),
            MessagesIntent::GetConversations(Outcome::Pending),
        );
        let state = MessagesReducer::reduce(
            state,
            MessagesIntent::GetMessages(Outcome::Rejected("Conversation not found".to_string())),
        );

        assert!(state.conversation_status.is_loading());
        assert!(state.message_status.is_error());
    }

    #[test]
    fn select_conversation() {
        let state = MessagesReducer::reduce(
            MessagesState::default(),
            MessagesIntent::SetSelectedConversation(Some(EntityId::Int(4))),
        );
        assert_eq!(state.selected_conversation, Some(EntityId::Int(4)));
        assert_eq!(state.message_status, FetchStatus::Idle);
    }
}
