//! Schema-less structured values constrained to a limited, knowable type set.
//!
//! The [`simple`] module provides a closed, JSON-mirroring value model and a
//! conversion engine that reduces arbitrary typed data to that model.

/// Value model, conversion engine, and JSON bridge.
pub mod simple;
