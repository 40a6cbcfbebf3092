pub mod schema_domain_error;
