pub mod crud_service_impl;
pub mod schema_orchestration_service_impl;
