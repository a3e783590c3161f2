use core::fmt::{self, Display};
use std::io;

/// Kind of an open container on the emitter stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Array,
    Object,
}

impl Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Kind::Array => formatter.write_str("array"),
            Kind::Object => formatter.write_str("object"),
        }
    }
}

/// Errors reported by the emitter. Apart from `Io`, every variant is a
/// violation of the call sequence by the caller; the session should be
/// abandoned once one is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("max stack depth exceeded")]
    StackOverflow,
    #[error("stack underflow")]
    StackUnderflow,
    #[error("close {expected} called on {found}")]
    KindMismatch { expected: Kind, found: Kind },
    #[error("object closed without placing last value")]
    DanglingKey,
    #[error("key placed outside of object")]
    NotInObject,
    #[error("two keys placed without intermediate value")]
    DuplicateKeyCall,
    #[error("need to put a key before putting a value into an object")]
    ValueWithoutKey,
    #[error("session finished with {0} unclosed containers")]
    UnclosedContainers(usize),
    #[error("sink error: {0}")]
    Io(#[from] io::Error),
}

/// Result type returned by emitter operations.
pub type Result<T> = core::result::Result<T, Error>;
