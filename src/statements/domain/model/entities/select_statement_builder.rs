use crate::statements::domain::model::value_objects::{
    sql_param::SqlParam, statement_order_by::StatementOrderBy,
};

const OPEN_RANGE_FROM: i64 = 0;
const OPEN_RANGE_TO: i64 = i64::MAX;

/// Persistent SELECT builder: every operation returns a new builder and leaves
/// `self` untouched, so one base query can be branched into several variants.
///
/// Clauses are appended in call order. `order_by`, `add_offset` and
/// `add_limit` belong after every condition.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectStatementBuilder {
    statement: String,
    next_param_position: usize,
    params: Vec<SqlParam>,
    has_condition: bool,
}

impl SelectStatementBuilder {
    pub fn new(select_columns: &str, table_name: &str) -> Self {
        Self {
            statement: format!("SELECT {select_columns} FROM {table_name}"),
            next_param_position: 1,
            params: Vec::new(),
            has_condition: false,
        }
    }

    fn condition_keyword(&self) -> &'static str {
        if self.has_condition { "AND" } else { "WHERE" }
    }

    fn extend(&self, clause: &str, params: Vec<SqlParam>, opens_condition: bool) -> Self {
        let next_param_position = self.next_param_position + params.len();
        let mut all_params = self.params.clone();
        all_params.extend(params);

        Self {
            statement: format!("{}{}", self.statement, clause),
            next_param_position,
            params: all_params,
            has_condition: self.has_condition || opens_condition,
        }
    }

    pub fn add_equal_condition(&self, column: &str, value: impl Into<SqlParam>) -> Self {
        let clause = format!(
            " {} {} = ${}",
            self.condition_keyword(),
            column,
            self.next_param_position
        );
        self.extend(&clause, vec![value.into()], true)
    }

    /// Appends `column ~ '^[pattern]'` with the pattern inlined into the text.
    ///
    /// Single quotes are doubled; the pattern is otherwise not sanitized and
    /// must not come from untrusted input.
    pub fn add_like_condition(&self, column: &str, pattern: &str) -> Self {
        let escaped_pattern = pattern.replace('\'', "''");
        let clause = format!(
            " {} {} ~ '^[{}]'",
            self.condition_keyword(),
            column,
            escaped_pattern
        );
        self.extend(&clause, Vec::new(), true)
    }

    pub fn add_in_condition<I, V>(&self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SqlParam>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();
        if values.is_empty() {
            return self.clone();
        }

        let placeholders = (0..values.len())
            .map(|offset| format!("${}", self.next_param_position + offset))
            .collect::<Vec<_>>()
            .join(",");

        let clause = format!(
            " {} {} IN ({})",
            self.condition_keyword(),
            column,
            placeholders
        );
        self.extend(&clause, values, true)
    }

    pub fn maybe_add_equal_string_condition(&self, column: &str, value: &str) -> Self {
        if value.is_empty() {
            return self.clone();
        }

        self.add_equal_condition(column, value)
    }

    pub fn filter_boolean(&self, column: &str, value: bool) -> Self {
        self.add_equal_condition(column, value)
    }

    pub fn add_range(
        &self,
        column: &str,
        from: impl Into<SqlParam>,
        to: impl Into<SqlParam>,
    ) -> Self {
        let clause = format!(
            " {} {} BETWEEN ${} AND ${}",
            self.condition_keyword(),
            column,
            self.next_param_position,
            self.next_param_position + 1
        );
        self.extend(&clause, vec![from.into(), to.into()], true)
    }

    /// Range over epoch-based timestamps; a zero bound leaves that side open.
    pub fn add_date_range(&self, column: &str, date_from: i64, date_to: i64) -> Self {
        self.add_int64_range(column, date_from, date_to)
    }

    pub fn add_int64_range(&self, column: &str, from: i64, to: i64) -> Self {
        if from == 0 && to == 0 {
            return self.clone();
        }

        let from = if from > 0 { from } else { OPEN_RANGE_FROM };
        let to = if to > 0 { to } else { OPEN_RANGE_TO };

        self.add_range(column, from, to)
    }

    pub fn order_by(&self, order_by: Option<&StatementOrderBy>) -> Self {
        let Some(order_by) = order_by else {
            return self.clone();
        };

        let clause = format!(" ORDER BY {} {}", order_by.by(), order_by.direction());
        self.extend(&clause, Vec::new(), false)
    }

    pub fn add_offset(&self, offset: i64) -> Self {
        if offset == 0 {
            return self.clone();
        }

        let clause = format!(" OFFSET ${}", self.next_param_position);
        self.extend(&clause, vec![offset.into()], false)
    }

    pub fn add_limit(&self, limit: i64) -> Self {
        if limit == 0 {
            return self.clone();
        }

        let clause = format!(" LIMIT ${}", self.next_param_position);
        self.extend(&clause, vec![limit.into()], false)
    }

    pub fn statement(&self) -> &str {
        &self.statement
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    pub fn next_param_position(&self) -> usize {
        self.next_param_position
    }

    pub fn has_condition(&self) -> bool {
        self.has_condition
    }

    pub fn finalize(&self) -> (String, Vec<SqlParam>) {
        (self.statement.clone(), self.params.clone())
    }
}
