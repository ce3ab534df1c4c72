use smc_reader::{
    prelude::*,
    smc::{constants::*, render},
};

fn main() -> Result<()> {
    // Prefer the real controller, fall back to canned data elsewhere
    let reading = match SmcKeyReader::new(PlatformLocator).read_key("TC0P", "2") {
        Ok(reading) => reading,
        Err(e) => {
            println!("Hardware SMC not usable ({}), using in-memory data", e);
            let smc = InMemorySmc::new()
                .with_key(SMC_KEY_CPU_TEMP, vec![0x2A, 0x80])
                .with_key(SMC_KEY_FAN_NUM, vec![0x02]);
            SmcKeyReader::new(smc).read_key("TC0P", "2")?
        },
    };

    println!("{}", render::signature_line(reading.signature));
    println!("{} ({}): {}", reading.key, reading.id, reading.hex());
    Ok(())
}
