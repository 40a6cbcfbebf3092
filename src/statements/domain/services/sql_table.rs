/// Anything that can describe a table well enough to create it and to order
/// INSERT/UPDATE parameters.
pub trait SqlTable: Send + Sync {
    /// Column names in positional parameter order.
    fn column_names(&self) -> Vec<String>;

    fn table_name(&self) -> &str;

    fn key_column(&self) -> &str;

    fn create_statement(&self) -> String;
}
