//! Key/value helpers for rendering decoded radio attributes with a
//! [`jdump::Emitter`].

pub mod attr;
pub mod meta;
pub mod types;

pub use self::attr::PutAttr;
pub use self::meta::dump_meta_info;
pub use self::types::{Error, MacAddr, Result};
