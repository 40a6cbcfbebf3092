pub mod crud_service;
pub mod schema_orchestration_service;
