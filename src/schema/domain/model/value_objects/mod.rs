pub mod connection_settings;
pub mod sql_identifier;
