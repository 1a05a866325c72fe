//! CLI command implementations

pub mod emit;

pub use emit::EmitArgs;
