pub mod a003_order;
