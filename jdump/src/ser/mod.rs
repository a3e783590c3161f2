mod impls;

use crate::{Emitter, Error, Result};

use std::io::{self, Write};

/// Trait for data that can be written through an [`Emitter`].
///
/// Implementations place exactly one value at the emitter's current
/// position, opening and closing any containers they need.
pub trait Dump {
    fn dump<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()>;
}

/// Run a full session writing `value` to `out` and hand the sink back.
pub fn to_writer<W: Write, T: ?Sized + Dump>(out: W, value: &T) -> Result<W> {
    let mut emitter = Emitter::new(out);
    value.dump(&mut emitter)?;
    emitter.finish()
}

/// Dump any value into a JSON string, terminated by a newline.
pub fn to_string<T: ?Sized + Dump>(value: &T) -> Result<String> {
    let out = to_writer(Vec::new(), value)?;
    String::from_utf8(out).map_err(|err| Error::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}
