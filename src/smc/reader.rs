use std::fmt;

use serde::{Serialize, Serializer};
use tracing::{debug, error, instrument};

use crate::{
    config::ReaderConfig,
    encoding,
    error::{Error, Result},
    smc::{
        key::KeyIdentifier,
        protocol::{SmcLocator, SmcProtocol},
        render,
    },
};

/// Steps of a single key read, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStage {
    Start,
    Encoded,
    IdBuilt,
    ProtocolBound,
    DataRead,
    Rendered,
    Done,
}

impl fmt::Display for ReadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReadStage::Start => "start",
            ReadStage::Encoded => "encoded",
            ReadStage::IdBuilt => "id-built",
            ReadStage::ProtocolBound => "protocol-bound",
            ReadStage::DataRead => "data-read",
            ReadStage::Rendered => "rendered",
            ReadStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Result of a successful key read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyReading {
    /// Key name as it was requested
    pub key: String,
    #[serde(serialize_with = "serialize_id")]
    pub id: KeyIdentifier,
    pub signature: u64,
    pub data: Vec<u8>,
}

fn serialize_id<S: Serializer>(id: &KeyIdentifier, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(id)
}

impl KeyReading {
    /// `[ 01 02 .. ]` rendering of the data bytes
    pub fn hex(&self) -> String {
        render::render_hex(&self.data)
    }

    /// The two console lines printed for a successful read
    pub fn to_lines(&self) -> [String; 2] {
        [render::signature_line(self.signature), render::reading_line(&self.key, &self.data)]
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parse a decimal byte count
pub fn parse_length(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_length(text));
    }
    trimmed.parse::<u32>().map_err(|_| Error::invalid_length(text))
}

/// Reads raw SMC keys through whatever endpoint the locator binds
#[derive(Debug, Clone)]
pub struct SmcKeyReader<L> {
    locator: L,
    config: ReaderConfig,
}

impl<L: SmcLocator> SmcKeyReader<L> {
    pub fn new(locator: L) -> Self {
        Self::with_config(locator, ReaderConfig::default())
    }

    pub fn with_config(locator: L, config: ReaderConfig) -> Self {
        Self { locator, config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read `requested_length` bytes of the key called `name`.
    ///
    /// Nothing is rendered unless every step succeeds; the first failing
    /// step decides the error.
    #[instrument(level = "debug", skip(self), fields(policy = ?self.config.key_policy))]
    pub fn read_key(&self, name: &str, requested_length: &str) -> Result<KeyReading> {
        debug!(stage = %ReadStage::Start);

        let id = {
            let encoded = encoding::encode_str(name)?;
            debug!(stage = %ReadStage::Encoded, bytes = encoded.len());
            KeyIdentifier::from_encoded(encoded.as_bytes(), self.config.key_policy)?
        };
        debug!(stage = %ReadStage::IdBuilt, %id);

        let length = parse_length(requested_length)?;
        self.read_id(name, id, length)
    }

    /// Read `length` bytes for an already-built identifier. `name` is only
    /// used for reporting.
    pub fn read_id(&self, name: &str, id: KeyIdentifier, length: u32) -> Result<KeyReading> {
        let endpoint = self.locator.locate().map_err(|e| {
            error!(error = %e, "failed to bind SMC endpoint");
            Error::ProtocolUnavailable
        })?;
        let signature = endpoint.signature();
        debug!(stage = %ReadStage::ProtocolBound, signature = %format!("{:#x}", signature));

        let data = read_exact(endpoint.as_ref(), name, id, length)?;
        debug!(stage = %ReadStage::DataRead, len = data.len());

        Ok(KeyReading { key: name.to_string(), id, signature, data })
    }
}

fn read_exact(endpoint: &dyn SmcProtocol, name: &str, id: KeyIdentifier, length: u32) -> Result<Vec<u8>> {
    // Refuse before allocating; a u32 length can ask for 4 GiB.
    if let Some(max) = endpoint.max_data_len() {
        if length as usize > max {
            error!(key = name, %id, length, max, "requested length exceeds endpoint limit");
            return Err(Error::read_failed(name, length));
        }
    }

    let mut data = vec![0u8; length as usize];
    endpoint.read_data(id, &mut data).map_err(|e| {
        error!(error = %e, key = name, %id, length, "SMC read failed");
        Error::read_failed(name, length)
    })?;
    Ok(data)
}
