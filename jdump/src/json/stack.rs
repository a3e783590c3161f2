use crate::{Error, Kind, Result};

/// Maximum nesting depth of arrays and objects in one session.
pub const MAX_DEPTH: usize = 16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ArrayState {
    Empty,
    HasElement,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ObjectState {
    Empty,
    KeyPending,
    ValuePlaced,
}

/// One open container. Only aggregates ever live on the stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Entry {
    Array(ArrayState),
    Object(ObjectState),
}

impl Entry {
    pub(crate) fn open(kind: Kind) -> Self {
        match kind {
            Kind::Array => Entry::Array(ArrayState::Empty),
            Kind::Object => Entry::Object(ObjectState::Empty),
        }
    }

    pub(crate) fn kind(&self) -> Kind {
        match self {
            Entry::Array(_) => Kind::Array,
            Entry::Object(_) => Kind::Object,
        }
    }

    /// Whether the container holds at least one element or pair.
    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Entry::Array(ArrayState::Empty) | Entry::Object(ObjectState::Empty))
    }
}

pub(crate) struct Stack {
    entries: Vec<Entry>,
}

impl Stack {
    pub(crate) fn new() -> Self {
        Stack {
            entries: Vec::with_capacity(MAX_DEPTH),
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_full(&self) -> bool {
        self.entries.len() >= MAX_DEPTH
    }

    pub(crate) fn top(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Entry> {
        self.entries.last_mut()
    }

    pub(crate) fn push(&mut self, kind: Kind) -> Result<()> {
        if self.is_full() {
            return Err(Error::StackOverflow);
        }
        self.entries.push(Entry::open(kind));
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Result<Entry> {
        self.entries.pop().ok_or(Error::StackUnderflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_rejected_at_max_depth() {
        let mut stack = Stack::new();
        for _ in 0..MAX_DEPTH {
            stack.push(Kind::Array).unwrap();
        }
        assert!(matches!(stack.push(Kind::Object), Err(Error::StackOverflow)));
        assert_eq!(stack.depth(), MAX_DEPTH);
        assert_eq!(stack.top().map(Entry::kind), Some(Kind::Array));
    }

    #[test]
    fn pop_on_empty_underflows() {
        let mut stack = Stack::new();
        assert!(matches!(stack.pop(), Err(Error::StackUnderflow)));
    }

    #[test]
    fn fresh_entries_are_empty() {
        assert!(Entry::open(Kind::Array).is_empty());
        assert!(Entry::open(Kind::Object).is_empty());
        assert!(!Entry::Object(ObjectState::KeyPending).is_empty());
        assert!(!Entry::Array(ArrayState::HasElement).is_empty());
    }
}
