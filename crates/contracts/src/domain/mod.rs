pub mod a001_supplier;
pub mod a002_commercial;
pub mod a003_order;
pub mod common;
