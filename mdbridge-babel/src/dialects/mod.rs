//! Dialect implementations
//!
//! - `host`: the vault's own markdown (tab indentation, `[[bracket]]` links). Identity both ways.
//! - `rich`: the editor's markdown (space indentation, standard links, whitespace entities).

pub mod host;
pub mod rich;

pub use host::HostDialect;
pub use rich::RichDialect;
