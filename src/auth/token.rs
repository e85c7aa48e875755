//! Bearer token secrets and the credential pair persisted between sessions.

pub mod pair;
pub mod secret;
