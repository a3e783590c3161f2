use core::fmt::{self, Display};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Dump(#[from] jdump::Error),
    #[error("MAC address must be 6 bytes, got {0}")]
    MacLength(usize),
}

pub type Result<T> = core::result::Result<T, Error>;

/// 48-bit hardware address, displayed as `aa:bb:cc:dd:ee:ff`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; 6]);

impl Display for MacAddr {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d, e, f] = self.0;
        write!(formatter, "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}", a, b, c, d, e, f)
    }
}

impl TryFrom<&[u8]> for MacAddr {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let addr: [u8; 6] = bytes.try_into().map_err(|_| Error::MacLength(bytes.len()))?;
        Ok(MacAddr(addr))
    }
}
