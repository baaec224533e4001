pub mod csv;
pub mod traits;

pub mod prelude {
    pub use super::csv::prelude::*;
    pub use super::traits::{Parsed, Parser, SkippedLine};
}
