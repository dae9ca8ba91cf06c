pub mod key;
pub mod table;
pub mod value;

pub use key::{MatchMode, RowKey};
pub use table::{ColumnInfo, SortOrder, TableSchema};
pub use value::{CellValue, Row};
