//! Request context carrying the acting user and their role.

use serde::{Deserialize, Serialize};

use quickcourt_core::types::id::UserId;
use quickcourt_entity::user::UserRole;

/// Context for the current request.
///
/// Identity is established by the external auth provider before a
/// request reaches these services; operations only need to know *who*
/// is acting and with which role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting user's ID.
    pub user_id: UserId,
    /// The acting user's role.
    pub role: UserRole,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
