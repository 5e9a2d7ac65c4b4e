//! Authorization over user-scoped private resources.

use workbridge_db::entities::user;

/// Action requested on a user's private resource scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    /// Read the resource.
    Read,
    /// Replace or otherwise mutate the resource.
    Update,
}

/// The authenticated principal an owner-path request runs as.
#[derive(Debug, Clone)]
pub struct Actor {
    /// User ID of the caller.
    pub user_id: String,
    /// Whether the caller holds the operator tier.
    pub is_operator: bool,
}

impl From<&user::Model> for Actor {
    fn from(user: &user::Model) -> Self {
        Self {
            user_id: user.id.clone(),
            is_operator: user.is_operator,
        }
    }
}

/// Capability check for actions on a specific user's private data.
///
/// A deny decision must abort the operation before any store access.
pub trait Authorizer: Send + Sync {
    /// Whether `actor` may perform `action` on the private data of the
    /// user identified by `owner_id`.
    fn authorize(&self, actor: &Actor, action: AuthAction, owner_id: &str) -> bool;
}

/// Default policy: users act on their own scope, operators on anyone's.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserScopeAuthorizer;

impl Authorizer for UserScopeAuthorizer {
    fn authorize(&self, actor: &Actor, _action: AuthAction, owner_id: &str) -> bool {
        actor.user_id == owner_id || actor.is_operator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(user_id: &str, is_operator: bool) -> Actor {
        Actor {
            user_id: user_id.to_string(),
            is_operator,
        }
    }

    #[test]
    fn test_user_may_act_on_own_scope() {
        let authorizer = UserScopeAuthorizer;
        assert!(authorizer.authorize(&actor("u1", false), AuthAction::Read, "u1"));
        assert!(authorizer.authorize(&actor("u1", false), AuthAction::Update, "u1"));
    }

    #[test]
    fn test_user_may_not_act_on_other_scope() {
        let authorizer = UserScopeAuthorizer;
        assert!(!authorizer.authorize(&actor("u1", false), AuthAction::Read, "u2"));
        assert!(!authorizer.authorize(&actor("u1", false), AuthAction::Update, "u2"));
    }

    #[test]
    fn test_operator_may_act_on_any_scope() {
        let authorizer = UserScopeAuthorizer;
        assert!(authorizer.authorize(&actor("op", true), AuthAction::Read, "u2"));
        assert!(authorizer.authorize(&actor("op", true), AuthAction::Update, "u2"));
    }
}
