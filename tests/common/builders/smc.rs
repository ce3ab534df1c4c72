use smc_reader::smc::{InMemorySmc, KeyIdentifier};

/// Builder for in-memory SMC endpoints used across the integration tests
pub struct TestSmcBuilder {
    signature: u64,
    keys: Vec<(KeyIdentifier, Vec<u8>)>,
    available: bool,
}

impl Default for TestSmcBuilder {
    fn default() -> Self {
        Self { signature: 0x5345_4e54_494e_454c, keys: Vec::new(), available: true }
    }
}

impl TestSmcBuilder {
    /// Create a new TestSmcBuilder with no keys
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signature(mut self, signature: u64) -> Self {
        self.signature = signature;
        self
    }

    /// Serve `data` for the raw identifier `id`
    pub fn with_key(mut self, id: u32, data: &[u8]) -> Self {
        self.keys.push((KeyIdentifier(id), data.to_vec()));
        self
    }

    /// Make the endpoint impossible to locate
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn build(self) -> InMemorySmc {
        let base = if self.available { InMemorySmc::new() } else { InMemorySmc::unavailable() };
        self.keys.into_iter().fold(base.with_signature(self.signature), |smc, (id, data)| smc.with_key(id, data))
    }
}
