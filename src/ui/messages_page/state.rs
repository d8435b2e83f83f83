use crate::model::EntityId;
use crate::mvi::StoreState;

use super::candidates::ConversationCandidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    /// Start-conversation picker is showing.
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatView {
    #[default]
    List,
    Chat,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessagesPageState {
    pub modal: ModalState,
    pub view: ChatView,
    /// Accounts offered by the start-conversation picker.
    pub search_data: Vec<ConversationCandidate>,
    /// Last account picked in the modal.
    pub value: Option<EntityId>,
    pub selected: Option<EntityId>,
}

impl StoreState for MessagesPageState {}

impl MessagesPageState {
    pub fn is_modal_open(&self) -> bool {
        self.modal == ModalState::Open
    }

    pub fn in_chat(&self) -> bool {
        self.view == ChatView::Chat
    }
}
