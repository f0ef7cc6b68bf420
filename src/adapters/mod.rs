// Adapters layer: concrete implementations for external systems (output streams, host runtime values).

pub mod host;
pub mod sink;
