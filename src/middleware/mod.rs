//! Request middleware and extractors.
//!
//! - [`session`]: the [`CurrentSession`](session::CurrentSession) extractor,
//!   which verifies the session cookie and loads the principal's item data
//! - [`ui_access`]: the gate in front of admin routes
//!
//! # Session Flow
//!
//! 1. Client sends the `sickfits-session` cookie
//! 2. `CurrentSession` verifies it; an invalid or expired cookie means no session
//! 3. The selected fields of the principal item are loaded as session data
//! 4. `require_ui_access` runs the configured access predicate on the result

pub mod session;
pub mod ui_access;
