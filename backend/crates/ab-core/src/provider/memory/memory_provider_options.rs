use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct MemoryProviderOptions {
    /// Delay applied before every asynchronous operation completes
    pub latency: Duration,
    /// Issue this code for every SMS instead of a random one
    pub sms_code: Option<String>,
}
