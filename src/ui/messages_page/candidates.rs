use crate::model::{Conversation, EntityId, Role, User};

/// Label shown for the assistant admin account.
pub const CITY_GOVERNMENT_LABEL: &str = "City Government";

/// One entry of the start-conversation picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationCandidate {
    pub id: EntityId,
    pub label: String,
}

/// Accounts the current user can open a new conversation with.
///
/// Only the assistant admin and barangay accounts qualify, minus the user
/// themselves and anyone they already have a conversation with. Keeps the
/// order of `users`.
pub fn conversation_candidates(
    users: &[User],
    conversations: &[Conversation],
    me: Option<&EntityId>,
) -> Vec<ConversationCandidate> {
    users
        .iter()
        .filter(|user| matches!(user.role, Role::AssistantAdmin | Role::Barangay))
        .filter(|user| me != Some(&user.id))
        .filter(|user| !conversations.iter().any(|c| c.involves(&user.id)))
        .map(|user| ConversationCandidate {
            id: user.id.clone(),
            label: match user.role {
                Role::AssistantAdmin => CITY_GOVERNMENT_LABEL.to_string(),
                _ => user.username.clone(),
            },
        })
        .collect()
}
