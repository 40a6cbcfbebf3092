pub mod sql_param;
pub mod statement_order_by;
