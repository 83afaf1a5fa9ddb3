//! Command implementations.
//!
//! Each command returns whether the run succeeded; the binary maps a
//! failed run to exit status 1.

pub mod convert;
pub mod sources;
pub mod validate;

pub use self::convert::execute_convert;
pub use self::sources::execute_sources;
pub use self::validate::execute_validate;
