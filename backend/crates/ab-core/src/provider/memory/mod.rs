//! In-process provider: accounts and the session live in memory.

mod account;
mod memory_provider;
mod memory_provider_options;

pub use account::{MemoryProfile, MemoryUser};
pub use memory_provider::MemoryProvider;
pub use memory_provider_options::MemoryProviderOptions;
