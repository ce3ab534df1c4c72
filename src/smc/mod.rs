//! SMC key identifiers, endpoints and the key reader
//!
//! A read takes a key name as typed by the user, turns it into the 32-bit
//! identifier the controller addresses keys by, binds an endpoint through a
//! [`SmcLocator`] and pulls exactly the requested number of bytes.
//!
//! # Examples
//!
//! ```
//! use smc_reader::smc::{InMemorySmc, SmcKeyReader};
//!
//! let smc = InMemorySmc::new().with_named_key("KEY0", vec![1, 2, 3, 4]).unwrap();
//! let reader = SmcKeyReader::new(smc);
//!
//! let reading = reader.read_key("KEY0", "4").unwrap();
//! assert_eq!(reading.id.value(), 0x4B45_5930);
//! assert_eq!(reading.hex(), "[ 01 02 03 04 ]");
//! ```

pub mod constants;
#[cfg(target_os = "macos")]
pub mod iokit;
pub mod key;
pub mod mock;
pub mod protocol;
pub mod reader;
pub mod render;

pub use key::{key_id_from_bytes, reversed_key_id, KeyIdentifier, KeyPolicy, SmcKey, SMC_KEY_LEN};
pub use mock::InMemorySmc;
pub use protocol::{PlatformLocator, SmcLocator, SmcProtocol};
pub use reader::{parse_length, KeyReading, ReadStage, SmcKeyReader};
pub use render::render_hex;
