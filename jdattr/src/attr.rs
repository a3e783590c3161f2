use crate::{MacAddr, Result};
use jdump::Emitter;

use std::io::Write;
use tracing::trace;

/// Write decoded attributes as key/value pairs of the enclosing object.
///
/// Apart from `put_flag`, every helper skips the pair entirely when the
/// attribute is absent, so missing attributes never show up as `null`.
pub trait PutAttr {
    /// `true` if the attribute was present, `false` otherwise. Always written.
    fn put_flag(&mut self, name: &str, present: bool) -> Result<()>;

    fn put_i8(&mut self, name: &str, attr: Option<i8>) -> Result<()>;

    fn put_u32(&mut self, name: &str, attr: Option<u32>) -> Result<()>;

    fn put_u64(&mut self, name: &str, attr: Option<u64>) -> Result<()>;

    fn put_attr_str(&mut self, name: &str, attr: Option<&str>) -> Result<()>;

    fn put_macaddr(&mut self, name: &str, attr: Option<&MacAddr>) -> Result<()>;
}

fn put_number<W: Write, T: core::fmt::Display>(jd: &mut Emitter<W>, name: &str, attr: Option<T>) -> Result<()> {
    match attr {
        Some(value) => {
            jd.put_key(name)?;
            jd.put_display(&value)?;
        }
        None => trace!(name, "attribute absent"),
    }
    Ok(())
}

impl<W: Write> PutAttr for Emitter<W> {
    fn put_flag(&mut self, name: &str, present: bool) -> Result<()> {
        self.put_key(name)?;
        self.put_bool(present)?;
        Ok(())
    }

    fn put_i8(&mut self, name: &str, attr: Option<i8>) -> Result<()> {
        put_number(self, name, attr)
    }

    fn put_u32(&mut self, name: &str, attr: Option<u32>) -> Result<()> {
        put_number(self, name, attr)
    }

    fn put_u64(&mut self, name: &str, attr: Option<u64>) -> Result<()> {
        put_number(self, name, attr)
    }

    fn put_attr_str(&mut self, name: &str, attr: Option<&str>) -> Result<()> {
        if let Some(value) = attr {
            self.put_key(name)?;
            self.put_str(value)?;
        } else {
            trace!(name, "attribute absent");
        }
        Ok(())
    }

    fn put_macaddr(&mut self, name: &str, attr: Option<&MacAddr>) -> Result<()> {
        if let Some(addr) = attr {
            self.put_key(name)?;
            let mut slot = self.reserve_value()?;
            slot.write_raw(b"\"")?;
            slot.write_display(addr)?;
            slot.write_raw(b"\"")?;
        } else {
            trace!(name, "attribute absent");
        }
        Ok(())
    }
}
