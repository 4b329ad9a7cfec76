pub mod format;
pub mod movers;
pub mod render;
pub mod schema;
pub mod sort;
pub mod summary;
pub mod table;

pub use crate::movers::MoverTab;
pub use crate::schema::{CoinSummary, Mover, QuoteSummary, Record, TopMovers};
pub use crate::sort::{Direction, SortField, SortState};
pub use crate::table::SortableTable;
