mod dto;
mod parser;
mod types;

pub mod prelude {
    pub use super::dto::StatementLineRaw;
    pub use super::parser::StatementParser;
    pub use super::types::{CsvDate, DateValidation, DayMonth};
}
