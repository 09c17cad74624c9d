pub mod api;
pub mod table;
