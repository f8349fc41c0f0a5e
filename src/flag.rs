//! Flags
//!
//! Typed, named settings collected in a [`FlagSet`], the registry the environment
//! overlay works against.

pub mod duration;
pub mod set;
pub mod value;

pub use duration::{format_duration, parse_duration};
pub use set::FlagSet;
pub use value::{FlagType, Typed, Value};
