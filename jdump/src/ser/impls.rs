use super::Dump;
use crate::{Emitter, Result};

use std::collections::BTreeMap;
use std::io::Write;

impl Dump for bool {
    fn dump<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
        emitter.put_bool(*self)
    }
}

impl Dump for str {
    fn dump<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
        emitter.put_str(self)
    }
}

impl Dump for String {
    fn dump<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
        emitter.put_str(self)
    }
}

macro_rules! integer {
    ($($ty:ident)*) => {
        $(
            impl Dump for $ty {
                fn dump<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
                    emitter.put_display(self)
                }
            }
        )*
    };
}

integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

macro_rules! float {
    ($($ty:ident)*) => {
        $(
            impl Dump for $ty {
                fn dump<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
                    // JSON has no representation for NaN and infinities.
                    if self.is_finite() {
                        emitter.put_display(self)
                    } else {
                        emitter.put_null()
                    }
                }
            }
        )*
    };
}

float!(f32 f64);

impl<T: ?Sized + Dump> Dump for &T {
    fn dump<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
        (**self).dump(emitter)
    }
}

impl<T: Dump> Dump for Option<T> {
    fn dump<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
        match self {
            Some(value) => value.dump(emitter),
            None => emitter.put_null(),
        }
    }
}

impl<T: Dump> Dump for [T] {
    fn dump<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
        emitter.put_array()?;
        for element in self {
            element.dump(emitter)?;
        }
        emitter.close_array()
    }
}

impl<T: Dump> Dump for Vec<T> {
    fn dump<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
        self.as_slice().dump(emitter)
    }
}

impl<K: AsRef<str>, V: Dump> Dump for BTreeMap<K, V> {
    fn dump<W: Write>(&self, emitter: &mut Emitter<W>) -> Result<()> {
        emitter.put_object()?;
        for (key, value) in self {
            emitter.put_key(key.as_ref())?;
            value.dump(emitter)?;
        }
        emitter.close_object()
    }
}
