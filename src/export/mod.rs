pub mod csv;

pub use self::csv::{write_records, write_summary};
