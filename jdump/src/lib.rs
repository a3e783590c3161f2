pub mod json;
pub mod ser;

mod types;

pub use crate::json::{write_str, Emitter, RawValue, MAX_DEPTH};
pub use crate::ser::{to_string, to_writer, Dump};
pub use crate::types::{Error, Kind, Result};
