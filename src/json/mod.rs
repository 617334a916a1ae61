//! Dynamic JSON handling
//!
//! Provider responses have shapes unknown until runtime: root arrays, nested
//! wrapper objects, arbitrary depth. All of that handling lives here; the
//! rest of the engine sees either a concrete value or an absent outcome.

mod path;

pub use path::{extract, extract_field};
