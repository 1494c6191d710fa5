// crates/console-client/src/components/mod.rs

pub mod accounts;
pub mod execution_log;
pub mod feed_table;
pub mod help;
pub mod order_entry;
pub mod order_list;
pub mod status_bar;
