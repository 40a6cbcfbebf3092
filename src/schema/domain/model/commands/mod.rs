pub mod initialize_database_command;
