//! Resource-ownership check.

use uuid::Uuid;

use crate::error::AuthError;

/// Allows a mutating operation only when the authenticated principal owns
/// the resource.
///
/// Pure equality, stateless. Call this only after authentication has
/// succeeded; the `Forbidden` signal is identical whether the mismatch is a
/// different owner or an unauthenticated caller that slipped through, so the
/// check leaks nothing either way.
pub fn ensure_owner(resource_owner_id: Uuid, principal_id: Uuid) -> Result<(), AuthError> {
    if resource_owner_id == principal_id {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}
