mod common;

use common::{run_cli, TestSmcBuilder};
use smc_reader::prelude::*;

#[test]
fn test_usage_error_with_one_argument() {
    let smc = TestSmcBuilder::new().build();
    let (code, output) = run_cli(&["readsmc", "KEY0"], smc);

    assert_eq!(code, 1);
    assert!(output.starts_with("AppleSMC Key Reader\n"));
    assert!(output.contains("Usage: readsmc <KeyName> <Length>\n"));
    assert!(output.contains("Copyright (C)"));
}

#[test]
fn test_success_scenario() {
    let smc = TestSmcBuilder::new()
        .with_signature(0x1122_3344_5566_7788)
        .with_key(0x4B45_5930, &[0x01, 0x02, 0x03, 0x04])
        .build();
    let (code, output) = run_cli(&["readsmc", "KEY0", "4"], smc);

    assert_eq!(code, 0);
    assert_eq!(output, "Signature: 0x1122334455667788\nKEY0: [ 01 02 03 04 ]\n");
}

#[test]
fn test_read_failure_scenario() {
    // The endpoint knows nothing about KEY0
    let smc = TestSmcBuilder::new().with_key(0x5443_3050, &[0x2A, 0x80]).build();
    let (code, output) = run_cli(&["readsmc", "KEY0", "4"], smc);

    assert_ne!(code, 0);
    assert_eq!(output, "ERROR: Could not read SMC key named KEY0 for length 4\n");
}

#[test]
fn test_binding_failure_scenario() {
    let smc = TestSmcBuilder::new().with_key(0x4B45_5930, &[1, 2, 3, 4]).unavailable().build();
    let (code, output) = run_cli(&["readsmc", "KEY0", "4"], smc);

    assert_eq!(code, 255);
    assert_eq!(output, "ERROR: Could not locate Apple SMC Protocol, no SMC read possible\n");
}

#[test]
fn test_reader_with_multiple_keys() -> Result<()> {
    let smc = TestSmcBuilder::new()
        .with_key(0x5443_3050, &[0x2A, 0x80])
        .with_key(0x464E_756D, &[0x02])
        .with_key(0x234B_4559, &[0x00, 0x00, 0x04, 0xD2])
        .build();
    let reader = SmcKeyReader::new(smc);

    assert_eq!(reader.read_key("TC0P", "2")?.hex(), "[ 2A 80 ]");
    assert_eq!(reader.read_key("FNum", "1")?.hex(), "[ 02 ]");
    assert_eq!(reader.read_key("#KEY", "4")?.data, vec![0, 0, 4, 0xD2]);
    Ok(())
}

#[test]
fn test_reader_rejects_wrong_length_per_key() {
    let smc = TestSmcBuilder::new().with_key(0x5443_3050, &[0x2A, 0x80]).build();
    let reader = SmcKeyReader::new(smc);

    for length in ["1", "3", "32"] {
        let err = reader.read_key("TC0P", length).unwrap_err();
        assert!(matches!(err, Error::ReadFailed { .. }));
        assert_eq!(err.to_string(), format!("Could not read SMC key named TC0P for length {}", length));
    }
}

#[test]
fn test_encoded_name_feeds_identifier() -> Result<()> {
    let units: Vec<u16> = "KEY0".encode_utf16().collect();
    let encoded = encode(&units)?;
    assert_eq!(encoded.as_bytes_with_nul(), b"KEY0\0");

    let id = KeyIdentifier::from_encoded(encoded.as_bytes(), KeyPolicy::Strict)?;
    assert_eq!(id, KeyIdentifier(0x4B45_5930));
    assert_eq!(SmcKey::from(id).to_string(), "KEY0");
    Ok(())
}

#[test]
fn test_platform_locator_reports_unavailable_off_macos() {
    if cfg!(target_os = "macos") {
        return;
    }
    let (code, output) = {
        let mut out = Vec::new();
        let code = smc_reader::cli::run(["readsmc", "TC0P", "2"], PlatformLocator, &mut out);
        (code, String::from_utf8(out).unwrap())
    };
    assert_eq!(code, 255);
    assert_eq!(output, "ERROR: Could not locate Apple SMC Protocol, no SMC read possible\n");
}
