//! Session-based authentication.
//!
//! Logging in is an identity assertion by username; no credentials are checked. The
//! only session field is the logged-in user's id.

mod session;

pub use session::{AuthSession, SESSION_USER_ID_KEY};
