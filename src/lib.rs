//! Public library API for the configuration runtime value model.

/// Value tree, host encoding/decoding, conversion hooks, and error chains.
pub mod value;
