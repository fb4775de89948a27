//! Pick: select and reorder lines from stdin with 1-based subscripts
//!
//! This library exposes pick's expression resolver and I/O driver for use in
//! property-based tests. The main binary is at src/main.rs.

pub mod cli;
pub mod driver;
pub mod error;
pub mod expression;
pub mod logger;

// Re-export commonly used types for convenience
pub use driver::{read_lines, run};
pub use error::{PickError, Result};
pub use expression::{parse_part, resolve_expression, Part};
