use crate::mvi::Reducer;

use super::intent::MessagesPageIntent;
use super::state::{ChatView, MessagesPageState, ModalState};

pub struct MessagesPageReducer;

impl Reducer for MessagesPageReducer {
    type State = MessagesPageState;
    type Intent = MessagesPageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MessagesPageIntent::ToggleModal => {
                let modal = match state.modal {
                    ModalState::Open => ModalState::Closed,
                    ModalState::Closed => ModalState::Open,
                };
                MessagesPageState { modal, ..state }
            }
            MessagesPageIntent::OpenModal => MessagesPageState {
                modal: ModalState::Open,
                ..state
            },
            MessagesPageIntent::CloseModal => MessagesPageState {
                modal: ModalState::Closed,
                ..state
            },
            MessagesPageIntent::SetSearchData(search_data) => {
                MessagesPageState { search_data, ..state }
            }
            MessagesPageIntent::ToggleChatMode => {
                let view = match state.view {
                    ChatView::Chat => ChatView::List,
                    ChatView::List => ChatView::Chat,
                };
                MessagesPageState { view, ..state }
            }
            MessagesPageIntent::SetChatMode(chat) => MessagesPageState {
                view: if chat { ChatView::Chat } else { ChatView::List },
                ..state
            },
            MessagesPageIntent::SetValue(value) => MessagesPageState { value, ..state },
            MessagesPageIntent::SelectConversation(selected) => {
                MessagesPageState { selected, ..state }
            }
            MessagesPageIntent::ConversationStarted { user, conversation } => {
                let search_data = state
                    .search_data
                    .into_iter()
                    .filter(|candidate| candidate.id != user)
                    .collect();
                MessagesPageState {
                    modal: ModalState::Closed,
                    view: ChatView::Chat,
                    search_data,
                    value: Some(user),
                    selected: conversation,
                }
            }
        }
    }
}
