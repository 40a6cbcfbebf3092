pub mod command_services;
pub mod database_creator;
