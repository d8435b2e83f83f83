/// Current request status of a store.
///
/// Replaces the loading/success/error boolean triple: exactly one status is
/// current, and only a failure carries a message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed {
        message: String,
    },
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// A store that never fetched counts as successful, so UIs render its
    /// (empty) contents instead of an error banner.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Idle | Self::Succeeded)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_mutually_exclusive() {
        let all = [
            FetchStatus::Idle,
            FetchStatus::Loading,
            FetchStatus::Succeeded,
            FetchStatus::Failed {
                message: "boom".to_string(),
            },
        ];
        for status in all {
            let set = [status.is_loading(), status.is_success(), status.is_error()]
                .iter()
                .filter(|f| **f)
                .count();
            assert_eq!(set, 1, "{:?}", status);
        }
    }

    #[test]
    fn only_failure_has_message() {
        assert_eq!(FetchStatus::Succeeded.error_message(), None);
        let failed = FetchStatus::Failed {
            message: "Project not found".to_string(),
        };
        assert_eq!(failed.error_message(), Some("Project not found"));
    }
}
