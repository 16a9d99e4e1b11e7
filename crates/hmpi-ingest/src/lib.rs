pub mod csv_table;
pub mod error;
pub mod row;

pub use csv_table::{
    IDENTIFYING_COLUMNS, IngestOptions, ParseMode, ParsedTable, UnparseableCell, parse_table,
    parse_table_with_options, read_table, read_table_with_options, required_columns,
};
pub use error::IngestError;
pub use row::{DataRow, MetalCell, Reading};
