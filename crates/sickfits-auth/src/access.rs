use crate::session::Session;

/// Decides whether a request may reach the admin UI.
pub type AccessPredicate = fn(Option<&Session>) -> bool;

/// Allows the admin UI only to requests whose session carries item data.
///
/// A valid cookie whose item has since been deleted yields a session with no
/// data and is refused. There are no role checks.
pub fn is_access_allowed(session: Option<&Session>) -> bool {
    session
        .and_then(|s| s.data.as_ref())
        .is_some_and(|data| !data.is_empty())
}
