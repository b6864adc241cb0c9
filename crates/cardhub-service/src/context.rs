//! Request context carrying the authenticated caller.

use cardhub_core::types::UserId;

/// Context for the current authenticated request.
///
/// Produced from a verified access token and passed into service methods
/// so that every owner-scoped operation knows *who* is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The stored username.
    pub username: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}
