pub mod connection_factory_repository;
pub mod postgres;
pub mod statement_executor_repository;
