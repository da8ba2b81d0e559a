/**
 * Resource Ownership
 *
 * Only the identity that created a post may change or remove it. Reading is
 * open to everyone, so there is no check on the read paths.
 */

use crate::backend::error::ApiError;
use crate::backend::middleware::Identity;

/// Outcome of an ownership check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

/// May `caller_id` mutate a resource owned by `owner_id`?
pub fn authorize(owner_id: i64, caller_id: i64) -> Access {
    if owner_id == caller_id {
        Access::Allow
    } else {
        Access::Deny
    }
}

/// `authorize` for handlers: `Deny` becomes 403 with `message`.
pub fn ensure_owner(owner_id: i64, caller: Identity, message: &str) -> Result<(), ApiError> {
    match authorize(owner_id, caller.user_id) {
        Access::Allow => Ok(()),
        Access::Deny => {
            tracing::warn!(
                "User {} denied access to a resource owned by {}",
                caller.user_id,
                owner_id
            );
            Err(ApiError::forbidden(message))
        }
    }
}
