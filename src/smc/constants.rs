//! Well-known SMC key names

use crate::smc::key::SmcKey;

/// CPU proximity temperature
pub const SMC_KEY_CPU_TEMP: SmcKey = SmcKey { key: *b"TC0P" };
/// GPU proximity temperature
pub const SMC_KEY_GPU_TEMP: SmcKey = SmcKey { key: *b"TG0P" };
/// Ambient temperature
pub const SMC_KEY_AMBIENT_TEMP: SmcKey = SmcKey { key: *b"TA0P" };
/// Battery temperature
pub const SMC_KEY_BATTERY_TEMP: SmcKey = SmcKey { key: *b"TB0T" };
/// Number of fans
pub const SMC_KEY_FAN_NUM: SmcKey = SmcKey { key: *b"FNum" };
/// Fan 0 actual speed
pub const SMC_KEY_FAN_SPEED: SmcKey = SmcKey { key: *b"F0Ac" };
/// Number of keys the SMC exposes
pub const SMC_KEY_COUNT: SmcKey = SmcKey { key: *b"#KEY" };
/// SMC firmware revision
pub const SMC_KEY_REVISION: SmcKey = SmcKey { key: *b"REV " };
