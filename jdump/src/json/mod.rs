mod emitter;
mod escape;
mod stack;

pub use self::emitter::{Emitter, RawValue};
pub use self::escape::write_str;
pub use self::stack::MAX_DEPTH;
