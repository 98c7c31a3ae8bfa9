//! Ownership guard for topics and cards.

use super::UserId;

/// Anything that belongs to exactly one user.
pub trait Owned {
    fn owner(&self) -> UserId;
}

/// Outcome of an ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied,
}

impl Access {
    pub fn is_allowed(self) -> bool {
        self == Access::Allowed
    }
}

/// The already-authenticated identity an operation runs on behalf of.
///
/// Constructed by the outer layer (CLI flag, config) and passed explicitly
/// into every notebook operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester(UserId);

impl Requester {
    pub fn new(user: UserId) -> Self {
        Self(user)
    }

    pub fn user(&self) -> UserId {
        self.0
    }

    /// Checks whether this requester owns `entity`.
    pub fn access(&self, entity: &impl Owned) -> Access {
        authorize(entity, self)
    }
}

/// Allows access only when `entity` belongs to `requester`.
pub fn authorize(entity: &impl Owned, requester: &Requester) -> Access {
    if entity.owner() == requester.user() {
        Access::Allowed
    } else {
        Access::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing(UserId);

    impl Owned for Thing {
        fn owner(&self) -> UserId {
            self.0
        }
    }

    #[test]
    fn owner_is_allowed() {
        let user = UserId::new();
        assert_eq!(authorize(&Thing(user), &Requester::new(user)), Access::Allowed);
    }

    #[test]
    fn other_user_is_denied() {
        let thing = Thing(UserId::new());
        let requester = Requester::new(UserId::new());
        assert_eq!(authorize(&thing, &requester), Access::Denied);
        assert!(!requester.access(&thing).is_allowed());
    }
}
