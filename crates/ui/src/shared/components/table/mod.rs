pub mod data_table;
pub mod sortable_header_cell;
pub mod table_cell_money;

pub use data_table::DataTable;
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_money::TableCellMoney;
