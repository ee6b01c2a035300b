//! Event registry errors

use super::RebundleError;

/// Creates a duplicate subscription error
pub fn duplicate_subscription(event: impl Into<String>) -> RebundleError {
    RebundleError::DuplicateSubscription {
        event: event.into(),
    }
}

/// Creates an unknown event error
pub fn unknown_event(event: impl Into<String>) -> RebundleError {
    RebundleError::UnknownEvent {
        event: event.into(),
    }
}
