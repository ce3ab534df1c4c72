//! AppleSMC endpoint over the IOKit user client
//!
//! # Safety
//!
//! All IOKit calls go through the raw bindings in `utils::ffi`. The service
//! handle is released by a scope guard as soon as the user client is open,
//! and the connection itself is closed when [`IoKitSmc`] is dropped, so no
//! handle outlives a failed read.

use std::{ffi::CString, mem::size_of};

use scopeguard::defer;
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    smc::{key::KeyIdentifier, protocol::SmcProtocol},
    utils::ffi::{
        io_connect_t, IOByteCount, IOConnectCallStructMethod, IOObjectRelease, IOServiceClose,
        IOServiceGetMatchingService, IOServiceMatching, IOServiceOpen, SMCKeyData_keyInfo_t, SMCKeyData_t,
        APPLE_SMC_SERVICE, KERNEL_INDEX_SMC, K_IOMAIN_PORT_DEFAULT, K_IORETURN_SUCCESS, K_SMC_HANDLE_YPC_EVENT,
        SMC_CMD_READ_BYTES, SMC_CMD_READ_KEYINFO, SMC_MAX_DATA_LEN, SMC_RESULT_SUCCESS,
    },
};

/// Signature reported for the IOKit endpoint
pub const APPLE_SMC_SIGNATURE: u64 = u64::from_le_bytes(*b"AppleSMC");

/// An open user-client connection to the AppleSMC driver
#[derive(Debug)]
pub struct IoKitSmc {
    conn: io_connect_t,
}

impl IoKitSmc {
    /// Locate the AppleSMC service and open a user client on it
    pub fn open() -> Result<Self> {
        let name = CString::new(APPLE_SMC_SERVICE).map_err(|e| Error::system(e.to_string()))?;

        // IOServiceGetMatchingService consumes the matching dictionary
        let service = unsafe { IOServiceGetMatchingService(K_IOMAIN_PORT_DEFAULT, IOServiceMatching(name.as_ptr())) };
        if service == 0 {
            debug!("AppleSMC service not found");
            return Err(Error::ProtocolUnavailable);
        }
        defer! {
            unsafe { IOObjectRelease(service); }
        }

        let mut conn: io_connect_t = 0;
        #[allow(deprecated)]
        let result = unsafe { IOServiceOpen(service, libc::mach_task_self(), KERNEL_INDEX_SMC, &mut conn) };
        if result != K_IORETURN_SUCCESS {
            debug!(result, "IOServiceOpen failed");
            return Err(Error::ProtocolUnavailable);
        }

        trace!(conn, "opened AppleSMC user client");
        Ok(Self { conn })
    }

    fn call(&self, input: &SMCKeyData_t) -> Result<SMCKeyData_t> {
        let mut output = SMCKeyData_t::default();
        let mut output_size: IOByteCount = size_of::<SMCKeyData_t>();

        let result = unsafe {
            IOConnectCallStructMethod(
                self.conn,
                K_SMC_HANDLE_YPC_EVENT,
                input as *const SMCKeyData_t,
                size_of::<SMCKeyData_t>(),
                &mut output as *mut SMCKeyData_t,
                &mut output_size,
            )
        };

        if result != K_IORETURN_SUCCESS {
            return Err(Error::system(format!("IOConnectCallStructMethod failed: {:#x}", result)));
        }
        if output.result != SMC_RESULT_SUCCESS {
            return Err(Error::system(format!("SMC command {} returned {:#x}", input.data8, output.result)));
        }
        Ok(output)
    }

    /// Size and type information the SMC keeps for `key`
    pub fn key_info(&self, key: KeyIdentifier) -> Result<SMCKeyData_keyInfo_t> {
        let input = SMCKeyData_t { key: key.value(), data8: SMC_CMD_READ_KEYINFO, ..Default::default() };
        Ok(self.call(&input)?.key_info)
    }
}

impl SmcProtocol for IoKitSmc {
    fn signature(&self) -> u64 {
        APPLE_SMC_SIGNATURE
    }

    fn max_data_len(&self) -> Option<usize> {
        Some(SMC_MAX_DATA_LEN)
    }

    fn read_data(&self, key: KeyIdentifier, out: &mut [u8]) -> Result<()> {
        if out.len() > SMC_MAX_DATA_LEN {
            return Err(Error::system(format!(
                "{} bytes requested, SMC transfers at most {}",
                out.len(),
                SMC_MAX_DATA_LEN
            )));
        }

        let info = self.key_info(key)?;
        if info.data_size as usize != out.len() {
            return Err(Error::system(format!(
                "key {} is {} bytes, {} requested",
                key,
                info.data_size,
                out.len()
            )));
        }

        let input = SMCKeyData_t { key: key.value(), key_info: info, data8: SMC_CMD_READ_BYTES, ..Default::default() };
        let output = self.call(&input)?;
        out.copy_from_slice(&output.bytes[..out.len()]);
        Ok(())
    }
}

impl Drop for IoKitSmc {
    fn drop(&mut self) {
        unsafe {
            IOServiceClose(self.conn);
        }
    }
}
