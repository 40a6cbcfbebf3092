use pg_orchestrator::statements::domain::model::entities::table_descriptor::TableDescriptor;

pub fn items_table() -> TableDescriptor {
    TableDescriptor::new("items")
        .with_serial_column("id")
        .as_primary()
        .with_text_column("label", true)
        .with_big_int_column("amount", false)
        .with_int_column("quantity", false)
        .with_boolean_column("active", false)
        .with_byte_a_column("payload", false)
}
