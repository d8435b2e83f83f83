mod candidates;
mod intent;
mod reducer;
mod state;

pub use candidates::{conversation_candidates, ConversationCandidate, CITY_GOVERNMENT_LABEL};
pub use intent::MessagesPageIntent;
pub use reducer::MessagesPageReducer;
pub use state::{ChatView, MessagesPageState, ModalState};
