//! In-memory SMC endpoint
//!
//! Serves fixed key data without touching hardware. Used by the integration
//! tests and the demo, and handy for exercising the reader on machines
//! without an SMC.

use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    smc::{
        key::{KeyIdentifier, SmcKey},
        protocol::{SmcLocator, SmcProtocol},
    },
};

/// Signature reported by [`InMemorySmc`] unless overridden
pub const IN_MEMORY_SIGNATURE: u64 = u64::from_le_bytes(*b"MockSMC\0");

#[derive(Debug, Clone)]
pub struct InMemorySmc {
    signature: u64,
    keys: HashMap<KeyIdentifier, Vec<u8>>,
    available: bool,
}

impl Default for InMemorySmc {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySmc {
    pub fn new() -> Self {
        Self { signature: IN_MEMORY_SIGNATURE, keys: HashMap::new(), available: true }
    }

    /// An endpoint that can never be located
    pub fn unavailable() -> Self {
        Self { available: false, ..Self::new() }
    }

    pub fn with_signature(mut self, signature: u64) -> Self {
        self.signature = signature;
        self
    }

    /// Serve `data` for the raw identifier `id`
    pub fn with_key(mut self, id: impl Into<KeyIdentifier>, data: impl Into<Vec<u8>>) -> Self {
        self.keys.insert(id.into(), data.into());
        self
    }

    /// Serve `data` for a 4-character key name such as `"TC0P"`
    pub fn with_named_key(self, name: &str, data: impl Into<Vec<u8>>) -> Result<Self> {
        let key: SmcKey = name.parse()?;
        Ok(self.with_key(key, data))
    }

    pub fn contains(&self, id: KeyIdentifier) -> bool {
        self.keys.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl SmcProtocol for InMemorySmc {
    fn signature(&self) -> u64 {
        self.signature
    }

    fn read_data(&self, key: KeyIdentifier, out: &mut [u8]) -> Result<()> {
        match self.keys.get(&key) {
            Some(data) if data.len() == out.len() => {
                out.copy_from_slice(data);
                Ok(())
            },
            Some(data) => Err(Error::System(format!(
                "key {} holds {} bytes, {} requested",
                SmcKey::from(key),
                data.len(),
                out.len()
            ))),
            None => Err(Error::System(format!("unknown key {}", key))),
        }
    }
}

impl SmcLocator for InMemorySmc {
    fn locate(&self) -> Result<Box<dyn SmcProtocol>> {
        if !self.available {
            return Err(Error::ProtocolUnavailable);
        }
        Ok(Box::new(self.clone()))
    }
}
