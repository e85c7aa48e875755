//! Auth-domain identifiers, token secrets, and credential pairs.

pub mod id;
pub mod token;

pub use id::*;
pub use token::{pair::*, secret::*};
