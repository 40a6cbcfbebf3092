use pg_orchestrator::statements::domain::{
    model::entities::table_descriptor::TableDescriptor, services::statement_templates,
};

fn users_table() -> TableDescriptor {
    TableDescriptor::new("app.users")
        .with_serial_column("id")
        .as_primary()
        .with_text_column("email", true)
        .with_boolean_column("active", true)
}

#[test]
fn renders_database_and_schema_ddl() {
    assert_eq!(
        statement_templates::create_database_statement("shop"),
        "CREATE DATABASE shop;"
    );
    assert_eq!(
        statement_templates::drop_database_statement("shop"),
        "DROP DATABASE IF EXISTS shop;"
    );
    assert_eq!(
        statement_templates::create_schema_statement("app"),
        "CREATE SCHEMA app;"
    );
    assert_eq!(
        statement_templates::drop_schema_statement("app"),
        "DROP SCHEMA IF EXISTS app CASCADE;"
    );
    assert_eq!(
        statement_templates::drop_table_statement(&users_table()),
        "DROP TABLE IF EXISTS app.users;"
    );
}

#[test]
fn insert_follows_column_order_and_returns_key() {
    assert_eq!(
        statement_templates::insert_statement(&users_table()),
        "INSERT INTO app.users(id,email,active) VALUES($1,$2,$3) RETURNING id;"
    );
}

#[test]
fn insert_omit_primary_skips_first_column() {
    assert_eq!(
        statement_templates::insert_omit_primary_statement(&users_table()),
        "INSERT INTO app.users(email,active) VALUES($1,$2) RETURNING id;"
    );
}

#[test]
fn update_binds_key_first() {
    assert_eq!(
        statement_templates::update_statement(&users_table(), "id"),
        "UPDATE app.users SET email=$2,active=$3 WHERE id=$1;"
    );
}

#[test]
fn renders_delete_count_max_and_lookup() {
    let table = users_table();

    assert_eq!(
        statement_templates::delete_statement(&table, "email"),
        "DELETE FROM app.users WHERE email=$1;"
    );
    assert_eq!(
        statement_templates::count_statement(&table),
        "SELECT count(*) FROM app.users;"
    );
    assert_eq!(
        statement_templates::max_statement(&table, "id"),
        "SELECT max(id) FROM app.users;"
    );
    assert_eq!(
        statement_templates::select_by_key_statement(&table),
        "SELECT * FROM app.users WHERE id = $1"
    );
}
