//! Binary to C header embedder
//!
//! Turns any file into a header that defines
//! `static unsigned char <name>[<len>]` holding the file's bytes, wrapped in
//! an include guard. Meant to run as a build step.

pub mod log;

pub mod config;
pub mod emit;
pub mod error;
pub mod guard;
pub mod slurp;

pub use config::EmbedConfig;
pub use emit::{emit_file, parse_header, write_header};
pub use error::{EmbedError, EmbedResult};
pub use guard::{header_guard, is_c_identifier};
pub use slurp::{read_sized, slurp_file, Slurped};
