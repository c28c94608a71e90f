// Adapters layer: concrete implementations for external systems (http source, sqlite and file sinks).

pub mod http;
pub mod json_lines;
pub mod sqlite;

pub use json_lines::{persist_to_file, JsonLinesSink};
pub use sqlite::{persist_to_database, SqliteSink};
