use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    encoding,
    error::{Error, Result},
};

/// Number of bytes in an SMC key name
pub const SMC_KEY_LEN: usize = 4;

/// How key names whose encoded form is not exactly four bytes are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Reject anything that does not encode to exactly four bytes
    #[default]
    Strict,
    /// Zero-pad short names and keep the last four bytes of long ones
    Lenient,
}

/// Pack four key bytes, given in reading order, into an identifier.
///
/// Byte `i` lands at bit offset `8 * (3 - i)`, so `b"ABCD"` becomes
/// `0x41424344` on every host.
pub const fn key_id_from_bytes(bytes: [u8; 4]) -> u32 {
    (bytes[0] as u32) << 24 | (bytes[1] as u32) << 16 | (bytes[2] as u32) << 8 | bytes[3] as u32
}

/// Reverse `encoded` into a zeroed buffer and read its first four bytes as a
/// little-endian integer.
///
/// For four-byte input this is [`key_id_from_bytes`]. Shorter input leaves
/// the high-order bytes zero (`"AB"` gives `0x4142`); longer input only keeps
/// the first four reversed positions, i.e. the last four bytes of the name.
pub fn reversed_key_id(encoded: &[u8]) -> u32 {
    let mut reversed = vec![0u8; encoded.len().max(SMC_KEY_LEN)];
    for (slot, &byte) in reversed.iter_mut().zip(encoded.iter().rev()) {
        *slot = byte;
    }
    u32::from_le_bytes([reversed[0], reversed[1], reversed[2], reversed[3]])
}

/// 32-bit identifier addressing one SMC key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyIdentifier(pub u32);

impl KeyIdentifier {
    /// Build the identifier for a key name under the given policy.
    ///
    /// The name is first run through the UTF-16 to UTF-8 encoder, the same
    /// way a name typed on the command line is.
    pub fn from_name(name: &str, policy: KeyPolicy) -> Result<Self> {
        let encoded = encoding::encode_str(name)?;
        Self::from_encoded(encoded.as_bytes(), policy)
    }

    /// Build the identifier from already-encoded key bytes
    pub fn from_encoded(encoded: &[u8], policy: KeyPolicy) -> Result<Self> {
        if encoded.len() != SMC_KEY_LEN {
            match policy {
                KeyPolicy::Strict => return Err(Error::InvalidKey(encoded.len())),
                KeyPolicy::Lenient => {
                    warn!(len = encoded.len(), "SMC key name is not 4 bytes, identifier will be padded or truncated");
                },
            }
        }
        Ok(KeyIdentifier(reversed_key_id(encoded)))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Key bytes in reading order
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl From<SmcKey> for KeyIdentifier {
    fn from(key: SmcKey) -> Self {
        KeyIdentifier(key_id_from_bytes(key.key))
    }
}

impl From<u32> for KeyIdentifier {
    fn from(value: u32) -> Self {
        KeyIdentifier(value)
    }
}

impl fmt::Display for KeyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// SMC key name in reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmcKey {
    pub key: [u8; 4],
}

impl SmcKey {
    /// Creates a new SmcKey from an array of 4 characters
    pub fn from_chars(chars: [char; 4]) -> Self {
        let mut key = [0; 4];
        for (slot, c) in key.iter_mut().zip(chars) {
            *slot = c as u8;
        }
        SmcKey { key }
    }

    pub fn identifier(self) -> KeyIdentifier {
        self.into()
    }
}

impl FromStr for SmcKey {
    type Err = Error;

    /// Parses a key name that encodes to exactly 4 bytes
    ///
    /// ```
    /// use smc_reader::smc::SmcKey;
    ///
    /// let key: SmcKey = "TC0P".parse().unwrap();
    /// assert_eq!(key.to_string(), "TC0P");
    /// assert!("TC0".parse::<SmcKey>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let encoded = encoding::encode_str(s)?;
        let bytes: [u8; 4] = encoded.as_bytes().try_into().map_err(|_| Error::InvalidKey(encoded.len()))?;
        Ok(SmcKey { key: bytes })
    }
}

impl From<KeyIdentifier> for SmcKey {
    fn from(id: KeyIdentifier) -> Self {
        SmcKey { key: id.to_bytes() }
    }
}

impl fmt::Display for SmcKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.key))
    }
}
