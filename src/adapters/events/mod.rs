//! Event bus adapters.
//!
//! - `InMemoryEventBus` - synchronous, in-process capture bus for testing

mod in_memory;

pub use in_memory::InMemoryEventBus;
