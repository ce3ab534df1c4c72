pub mod builders;

pub use builders::smc::TestSmcBuilder;

/// Run the CLI against `smc` and capture its exit status and stdout
pub fn run_cli(args: &[&str], smc: smc_reader::smc::InMemorySmc) -> (u8, String) {
    let mut out = Vec::new();
    let code = smc_reader::cli::run(args.iter().copied(), smc, &mut out);
    (code, String::from_utf8(out).expect("CLI output is UTF-8"))
}
