//! Receipt domain: the value types, the validator and the points rules.
//!
//! Nothing in here performs I/O. Storage is reached through [`ports`].

pub mod money;
pub mod points;
pub mod ports;
pub mod receipt;
pub mod validation;
