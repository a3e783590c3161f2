//! Incremental JSON emitter.
//!
//! The emitter writes JSON straight to its sink as the caller walks through
//! the data, one call per structural element. Separators and indentation are
//! derived from the container on top of the stack, so the caller only says
//! *what* comes next. Output is pretty-printed with two spaces per nesting
//! level, and opening delimiters carry a trailing space so that an empty
//! container reads `[ ]`:
//!
//! ```text
//! {
//!   "a": 12,
//!   "b": [
//!     1,
//!     2
//!   ],
//!   "c": [ ]
//! }
//! ```

use super::escape::write_str;
use super::stack::{ArrayState, Entry, ObjectState, Stack};
use crate::{Error, Kind, Result};

use core::fmt::Display;
use std::io::{self, Write};
use tracing::{trace, warn};

fn opening(kind: Kind) -> &'static [u8] {
    match kind {
        Kind::Array => b"[ ",
        Kind::Object => b"{ ",
    }
}

fn closing(kind: Kind) -> &'static [u8] {
    match kind {
        Kind::Array => b"]",
        Kind::Object => b"}",
    }
}

fn indent<W: Write>(out: &mut W, depth: usize) -> Result<()> {
    out.write_all(b"\n")?;
    for _ in 0..depth {
        out.write_all(b"  ")?;
    }
    Ok(())
}

/// Streaming JSON writer over a sink.
///
/// Every operation checks the call against the open containers and either
/// writes its part of the document or reports why the call is invalid.
/// Nothing is repaired: after an error the output written so far may be
/// incomplete and the session should be abandoned.
pub struct Emitter<W: Write> {
    out: W,
    stack: Stack,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W) -> Self {
        Emitter { out, stack: Stack::new() }
    }

    /// Number of currently open containers.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// The sink itself, for callers that write value text right after
    /// `put_pod(None, ..)`.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    // Punctuation and state update that precede any value, be it a scalar
    // or a nested container.
    fn place_value(&mut self) -> Result<()> {
        let depth = self.stack.depth();
        match self.stack.top_mut() {
            None => Ok(()),
            Some(Entry::Array(state)) => {
                let separate = *state == ArrayState::HasElement;
                *state = ArrayState::HasElement;
                if separate {
                    self.out.write_all(b",")?;
                }
                indent(&mut self.out, depth)
            }
            Some(Entry::Object(state)) => match *state {
                ObjectState::KeyPending => {
                    *state = ObjectState::ValuePlaced;
                    Ok(())
                }
                ObjectState::Empty | ObjectState::ValuePlaced => {
                    warn!(depth, "need to put a key before putting a value into an object");
                    Err(Error::ValueWithoutKey)
                }
            },
        }
    }

    /// Place a scalar value.
    ///
    /// `rep` is written through [`write_str`] with the given `len` and
    /// quoting. With `rep == None` only the punctuation is written and the
    /// caller is expected to write the value text next; prefer
    /// [`Emitter::reserve_value`] for that.
    pub fn put_pod(&mut self, rep: Option<&[u8]>, len: Option<usize>, quot_marks: bool) -> Result<()> {
        self.place_value()?;
        if let Some(rep) = rep {
            write_str(&mut self.out, rep, len, quot_marks)?;
        }
        Ok(())
    }

    /// Place a value whose text the caller writes itself.
    ///
    /// The container state is already advanced when this returns, so a
    /// failing raw write cannot leave the stack behind the output.
    pub fn reserve_value(&mut self) -> Result<RawValue<'_, W>> {
        self.place_value()?;
        Ok(RawValue { out: &mut self.out })
    }

    /// Place a quoted, escaped string value.
    pub fn put_str(&mut self, value: &str) -> Result<()> {
        self.put_pod(Some(value.as_bytes()), Some(value.len()), true)
    }

    /// Place a value written verbatim from its `Display` form, typically a
    /// number.
    pub fn put_display<T: ?Sized + Display>(&mut self, value: &T) -> Result<()> {
        self.reserve_value()?.write_display(value)
    }

    pub fn put_bool(&mut self, value: bool) -> Result<()> {
        let rep: &[u8] = if value { b"true" } else { b"false" };
        self.put_pod(Some(rep), None, false)
    }

    pub fn put_null(&mut self) -> Result<()> {
        self.put_pod(Some(b"null"), None, false)
    }

    fn open(&mut self, kind: Kind) -> Result<()> {
        // Checked up front so that a rejected open writes nothing.
        if self.stack.is_full() {
            warn!(%kind, depth = self.stack.depth(), "max stack depth exceeded");
            return Err(Error::StackOverflow);
        }
        self.place_value()?;
        self.out.write_all(opening(kind))?;
        self.stack.push(kind)?;
        trace!(%kind, depth = self.stack.depth(), "opened container");
        Ok(())
    }

    fn close(&mut self, kind: Kind) -> Result<()> {
        let top = match self.stack.top() {
            Some(top) => *top,
            None => {
                warn!(%kind, "stack underflow");
                return Err(Error::StackUnderflow);
            }
        };

        if top.kind() != kind {
            warn!(expected = %kind, found = %top.kind(), "close called on the wrong container");
            return Err(Error::KindMismatch {
                expected: kind,
                found: top.kind(),
            });
        }
        if top == Entry::Object(ObjectState::KeyPending) {
            warn!(depth = self.stack.depth(), "object closed without placing last value");
            return Err(Error::DanglingKey);
        }

        self.stack.pop()?;
        if !top.is_empty() {
            indent(&mut self.out, self.stack.depth())?;
        }
        self.out.write_all(closing(kind))?;
        trace!(%kind, depth = self.stack.depth(), "closed container");
        Ok(())
    }

    pub fn put_array(&mut self) -> Result<()> {
        self.open(Kind::Array)
    }

    pub fn close_array(&mut self) -> Result<()> {
        self.close(Kind::Array)
    }

    pub fn put_object(&mut self) -> Result<()> {
        self.open(Kind::Object)
    }

    pub fn close_object(&mut self) -> Result<()> {
        self.close(Kind::Object)
    }

    /// Place the key of the next pair in the enclosing object.
    pub fn put_key(&mut self, key: &str) -> Result<()> {
        let depth = self.stack.depth();
        let state = match self.stack.top_mut() {
            Some(Entry::Object(state)) => state,
            _ => {
                warn!(key, depth, "put_key() called outside of object");
                return Err(Error::NotInObject);
            }
        };
        if *state == ObjectState::KeyPending {
            warn!(key, depth, "two put_key() calls without intermediate placement of value");
            return Err(Error::DuplicateKeyCall);
        }

        let separate = *state == ObjectState::ValuePlaced;
        *state = ObjectState::KeyPending;
        if separate {
            self.out.write_all(b",")?;
        }
        indent(&mut self.out, depth)?;
        write_str(&mut self.out, key.as_bytes(), Some(key.len()), true)?;
        self.out.write_all(b": ")?;
        Ok(())
    }

    /// End the session: terminate the document with a newline, flush and
    /// hand the sink back.
    pub fn finish(self) -> Result<W> {
        let Emitter { mut out, stack } = self;
        if stack.depth() != 0 {
            warn!(depth = stack.depth(), "finish() called with non-empty stack");
            return Err(Error::UnclosedContainers(stack.depth()));
        }
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(out)
    }
}

/// Slot for one value whose text is written by the caller.
///
/// Obtained from [`Emitter::reserve_value`]. Nothing is added around the
/// written bytes, so the caller is responsible for producing a complete
/// JSON value.
pub struct RawValue<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> RawValue<'a, W> {
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.out.write_all(bytes)?;
        Ok(())
    }

    pub fn write_display<T: ?Sized + Display>(&mut self, value: &T) -> Result<()> {
        write!(self.out, "{}", value)?;
        Ok(())
    }

    /// Escaped text, see [`write_str`].
    pub fn write_escaped(&mut self, bytes: &[u8], len: Option<usize>, quot_marks: bool) -> Result<()> {
        write_str(&mut *self.out, bytes, len, quot_marks)
    }
}

impl<'a, W: Write> Write for RawValue<'a, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
