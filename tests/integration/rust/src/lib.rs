//! Integration test suite for the extended JSON deserializer
//!
//! Verifies that the components work together across crate boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use deserializer;
    pub use xjson_cli;
}
