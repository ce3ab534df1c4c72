use crate::{error::Result, smc::key::KeyIdentifier};

#[cfg(test)]
use mockall::automock;

/// A bound SMC endpoint.
///
/// Implementations only move bytes; the layout and meaning of a key's data
/// are defined by the controller and stay opaque here.
#[cfg_attr(test, automock)]
pub trait SmcProtocol {
    /// Endpoint signature reported alongside every reading
    fn signature(&self) -> u64;

    /// Fill `out` with exactly `out.len()` bytes of the key's data.
    ///
    /// Fails when the key is unknown or the endpoint refuses the length.
    fn read_data(&self, key: KeyIdentifier, out: &mut [u8]) -> Result<()>;

    /// Largest read the endpoint accepts, if it has a fixed limit
    fn max_data_len(&self) -> Option<usize> {
        None
    }
}

/// Finds and binds an SMC endpoint
#[cfg_attr(test, automock)]
pub trait SmcLocator {
    /// Bind the endpoint. Failing here is fatal for the whole read.
    fn locate(&self) -> Result<Box<dyn SmcProtocol>>;
}

/// Locator for the endpoint available on the current platform
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformLocator;

#[cfg(target_os = "macos")]
impl SmcLocator for PlatformLocator {
    fn locate(&self) -> Result<Box<dyn SmcProtocol>> {
        Ok(Box::new(crate::smc::iokit::IoKitSmc::open()?))
    }
}

#[cfg(not(target_os = "macos"))]
impl SmcLocator for PlatformLocator {
    fn locate(&self) -> Result<Box<dyn SmcProtocol>> {
        tracing::debug!("no SMC endpoint on this platform");
        Err(crate::error::Error::ProtocolUnavailable)
    }
}
