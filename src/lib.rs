//! smc-reader - read raw System Management Controller keys
//!
//! This crate reads a named SMC key and hands back the raw bytes the
//! controller returns. It is the library behind the `readsmc` binary.
//!
//! # Features
//!
//! - **Encoding**: bounded UTF-16 to UTF-8 conversion of key names into
//!   null-terminated buffers
//! - **Key identifiers**: 4-character key names packed into the 32-bit
//!   identifiers the SMC addresses keys by
//! - **Key reads**: length-bounded reads through any [`smc::SmcProtocol`]
//!   endpoint, rendered as `[ 0A FF 00 ]`
//! - **Endpoints**: the AppleSMC user client on macOS and an in-memory
//!   endpoint everywhere
//!
//! # Examples
//!
//! ```rust
//! use smc_reader::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let smc = InMemorySmc::new().with_named_key("TC0P", vec![0x2A, 0x80])?;
//!     let reader = SmcKeyReader::new(smc);
//!
//!     let reading = reader.read_key("TC0P", "2")?;
//!     println!("{}: {}", reading.key, reading.hex());
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! Every operation returns [`Result`]. Failures are terminal for a read;
//! nothing is retried.
//!
//! ```rust
//! use smc_reader::{smc::InMemorySmc, smc::SmcKeyReader, Error};
//!
//! let reader = SmcKeyReader::new(InMemorySmc::unavailable());
//! let err = reader.read_key("TC0P", "2").unwrap_err();
//! assert!(matches!(err, Error::ProtocolUnavailable));
//! ```
//!
//! # Safety
//!
//! The macOS endpoint calls into IOKit through raw FFI. Handles are owned by
//! Rust values and released on drop, including on early error returns.

#![doc(html_root_url = "https://docs.rs/smc-reader/0.1.0")]

pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod smc;
pub mod utils;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::config::{KeyPolicy, OutputFormat, ReaderConfig};
    pub use crate::encoding::{encode, encode_str, EncodedBuffer};
    pub use crate::smc::{InMemorySmc, KeyIdentifier, KeyReading, PlatformLocator, SmcKey, SmcKeyReader};
    pub use crate::smc::{SmcLocator, SmcProtocol};
    pub use crate::Error;
    pub use crate::Result;
}
