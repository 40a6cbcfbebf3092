
pub use fakes::FakeConnectionFactory;
pub use fixtures::{initialize_command, orders_table, users_table};
pub use harness::{create_crud_harness, create_orchestration_harness, creator_with};
