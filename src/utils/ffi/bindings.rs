//! FFI bindings for talking to the AppleSMC user client.
//!
//! The wire struct and command constants are available on every platform so
//! they can be inspected and tested; the IOKit functions only link on macOS.

#![allow(non_camel_case_types)]

#[cfg(target_os = "macos")]
use std::os::raw::{c_char, c_void};

#[cfg(target_os = "macos")]
use libc::{kern_return_t, mach_port_t};

//------------------------------------------------------------------------------
// SMC user-client constants
//------------------------------------------------------------------------------

/// IOKit service class name of the SMC driver
pub const APPLE_SMC_SERVICE: &str = "AppleSMC";
/// User-client type passed to `IOServiceOpen`
pub const KERNEL_INDEX_SMC: u32 = 2;
/// Struct-method selector that carries SMC commands
pub const K_SMC_HANDLE_YPC_EVENT: u32 = 2;
/// SMC command to read bytes
pub const SMC_CMD_READ_BYTES: u8 = 5;
/// SMC command to read key info
pub const SMC_CMD_READ_KEYINFO: u8 = 9;
/// Maximum payload carried by one SMC transaction
pub const SMC_MAX_DATA_LEN: usize = 32;
/// Successful IOKit operation
pub const K_IORETURN_SUCCESS: i32 = 0;
/// `result` byte reported by the SMC for a successful command
pub const SMC_RESULT_SUCCESS: u8 = 0;
/// `result` byte reported by the SMC for an unknown key
pub const SMC_RESULT_KEY_NOT_FOUND: u8 = 0x84;

/// IO object type
pub type io_object_t = u32;
/// IO service type
pub type io_service_t = io_object_t;
/// IO connection type
pub type io_connect_t = io_object_t;

/// Default main port for IOKit
pub const K_IOMAIN_PORT_DEFAULT: u32 = 0;

//------------------------------------------------------------------------------
// SMCKeyData_t
//------------------------------------------------------------------------------

/// SMC version information
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct SMCKeyData_vers_t {
    pub major: u8,
    pub minor: u8,
    pub build: u8,
    pub reserved: [u8; 1],
    pub release: u16,
}

/// SMC power limit data
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct SMCKeyData_pLimitData_t {
    pub version: u16,
    pub length: u16,
    pub cpu_plimit: u32,
    pub gpu_plimit: u32,
    pub mem_plimit: u32,
}

/// SMC key information
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct SMCKeyData_keyInfo_t {
    /// Data size in bytes
    pub data_size: u32,
    /// Data type as a packed four-character code
    pub data_type: u32,
    pub data_attributes: u8,
}

/// Request and response block exchanged with the SMC user client
#[repr(C)]
#[derive(Debug, Default, Copy, Clone)]
pub struct SMCKeyData_t {
    /// Key identifier, first character in the most significant byte
    pub key: u32,
    pub vers: SMCKeyData_vers_t,
    pub p_limit_data: SMCKeyData_pLimitData_t,
    pub key_info: SMCKeyData_keyInfo_t,
    /// SMC status of the command
    pub result: u8,
    pub status: u8,
    /// Command selector
    pub data8: u8,
    pub data32: u32,
    /// Payload
    pub bytes: [u8; SMC_MAX_DATA_LEN],
}

const _: () = assert!(std::mem::size_of::<SMCKeyData_t>() == 80);

/// IOKit byte count type
pub type IOByteCount = usize;

//------------------------------------------------------------------------------
// IOKit function declarations
//------------------------------------------------------------------------------

#[cfg(target_os = "macos")]
#[link(name = "IOKit", kind = "framework")]
extern "C" {
    /// Create matching dictionary for IOKit service
    pub fn IOServiceMatching(name: *const c_char) -> *mut c_void;
    /// Get matching service from IOKit registry; consumes the dictionary
    pub fn IOServiceGetMatchingService(mainPort: mach_port_t, matching: *mut c_void) -> io_service_t;
    /// Open a user client on a service
    pub fn IOServiceOpen(
        service: io_service_t,
        owningTask: mach_port_t,
        type_: u32,
        connect: *mut io_connect_t,
    ) -> kern_return_t;
    /// Close a user client
    pub fn IOServiceClose(connect: io_connect_t) -> kern_return_t;
    /// Release an IOKit object reference
    pub fn IOObjectRelease(object: io_object_t) -> kern_return_t;

    /// Call IOKit service method with struct parameters
    pub fn IOConnectCallStructMethod(
        connection: io_connect_t,
        selector: u32,
        inputStruct: *const SMCKeyData_t,
        inputStructCnt: IOByteCount,
        outputStruct: *mut SMCKeyData_t,
        outputStructCnt: *mut IOByteCount,
    ) -> kern_return_t;
}
