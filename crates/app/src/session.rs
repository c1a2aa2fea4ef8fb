//! Session

use crate::uuids::TypedUuid;

/// Staff member operating the quote screen.
#[derive(Debug, Clone, Copy)]
pub struct User;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// Who is acting. Passed explicitly to every service call and recorded on the orders it
/// creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user: UserUuid,
}

impl Session {
    #[must_use]
    pub const fn new(user: UserUuid) -> Self {
        Self { user }
    }
}
