use pg_orchestrator::statements::domain::model::{
    entities::select_statement_builder::SelectStatementBuilder,
    value_objects::{sql_param::SqlParam, statement_order_by::StatementOrderBy},
};

#[test]
fn builds_conditions_offset_and_limit_in_call_order() {
    let (statement, params) = SelectStatementBuilder::new("*", "tablename")
        .add_equal_condition("label", 45)
        .add_in_condition("inlabel", ["p1", "p2"])
        .add_equal_condition("label2", 88)
        .add_offset(1200)
        .add_limit(120)
        .finalize();

    assert_eq!(
        statement,
        "SELECT * FROM tablename WHERE label = $1 AND inlabel IN ($2,$3) AND label2 = $4 OFFSET $5 LIMIT $6"
    );
    assert_eq!(
        params,
        vec![
            SqlParam::Int(45),
            SqlParam::Text("p1".to_string()),
            SqlParam::Text("p2".to_string()),
            SqlParam::Int(88),
            SqlParam::BigInt(1200),
            SqlParam::BigInt(120),
        ]
    );
}

#[test]
fn first_condition_uses_where_and_later_ones_use_and() {
    let builder = SelectStatementBuilder::new("id", "users")
        .add_in_condition("role", ["admin"])
        .add_equal_condition("active", true)
        .add_equal_condition("tenant", "acme");

    assert_eq!(
        builder.statement(),
        "SELECT id FROM users WHERE role IN ($1) AND active = $2 AND tenant = $3"
    );
    assert_eq!(builder.next_param_position(), builder.params().len() + 1);
    assert!(builder.has_condition());
}

#[test]
fn empty_in_condition_leaves_builder_unchanged() {
    let base = SelectStatementBuilder::new("*", "users").add_equal_condition("id", 7);

    let unchanged = base.add_in_condition("role", Vec::<String>::new());

    assert_eq!(unchanged, base);
}

#[test]
fn operations_never_modify_the_original_builder() {
    let base = SelectStatementBuilder::new("*", "orders");

    let by_customer = base.add_equal_condition("customer_id", 3_i64);
    let by_status = base.add_equal_condition("status", "paid");

    assert_eq!(base.statement(), "SELECT * FROM orders");
    assert!(base.params().is_empty());
    assert_eq!(base.next_param_position(), 1);
    assert_eq!(by_customer.statement(), "SELECT * FROM orders WHERE customer_id = $1");
    assert_eq!(by_status.statement(), "SELECT * FROM orders WHERE status = $1");
    assert_eq!(by_status.params(), &[SqlParam::Text("paid".to_string())]);
}

#[test]
fn maybe_add_equal_string_condition_skips_empty_values() {
    let base = SelectStatementBuilder::new("*", "users");

    assert_eq!(base.maybe_add_equal_string_condition("name", ""), base);
    assert_eq!(
        base.maybe_add_equal_string_condition("name", "ada").statement(),
        "SELECT * FROM users WHERE name = $1"
    );
}

#[test]
fn like_condition_inlines_pattern_without_binding() {
    let builder = SelectStatementBuilder::new("*", "words")
        .add_equal_condition("lang", "en")
        .add_like_condition("word", "abc");

    assert_eq!(
        builder.statement(),
        "SELECT * FROM words WHERE lang = $1 AND word ~ '^[abc]'"
    );
    assert_eq!(builder.params().len(), 1);
    assert_eq!(builder.next_param_position(), 2);
}

#[test]
fn like_condition_doubles_single_quotes() {
    let builder = SelectStatementBuilder::new("*", "words").add_like_condition("word", "a'b");

    assert_eq!(builder.statement(), "SELECT * FROM words WHERE word ~ '^[a''b]'");
}

#[test]
fn zero_ranges_are_no_ops() {
    let base = SelectStatementBuilder::new("*", "events");

    assert_eq!(base.add_date_range("created_at", 0, 0), base);
    assert_eq!(base.add_int64_range("size", 0, 0), base);
}

#[test]
fn open_ended_ranges_use_sentinel_bounds() {
    let base = SelectStatementBuilder::new("*", "events");

    let until = base.add_date_range("created_at", 0, 1_700_000_000);
    assert_eq!(
        until.statement(),
        "SELECT * FROM events WHERE created_at BETWEEN $1 AND $2"
    );
    assert_eq!(
        until.params(),
        &[SqlParam::BigInt(0), SqlParam::BigInt(1_700_000_000)]
    );

    let since = base.add_date_range("created_at", 1_600_000_000, 0);
    assert_eq!(
        since.params(),
        &[SqlParam::BigInt(1_600_000_000), SqlParam::BigInt(i64::MAX)]
    );

    let sized = base.add_int64_range("size", 10, 20);
    assert_eq!(sized.params(), &[SqlParam::BigInt(10), SqlParam::BigInt(20)]);
}

#[test]
fn range_after_condition_continues_positions() {
    let builder = SelectStatementBuilder::new("*", "events")
        .filter_boolean("archived", false)
        .add_range("score", 1, 5);

    assert_eq!(
        builder.statement(),
        "SELECT * FROM events WHERE archived = $1 AND score BETWEEN $2 AND $3"
    );
    assert_eq!(
        builder.params(),
        &[SqlParam::Bool(false), SqlParam::Int(1), SqlParam::Int(5)]
    );
}

#[test]
fn order_by_renders_direction_and_skips_none() {
    let base = SelectStatementBuilder::new("*", "events");

    assert_eq!(base.order_by(None), base);
    assert_eq!(
        base.order_by(Some(&StatementOrderBy::descending("created_at")))
            .statement(),
        "SELECT * FROM events ORDER BY created_at DESC"
    );
    assert_eq!(
        base.order_by(Some(&StatementOrderBy::ascending("name")))
            .add_limit(10)
            .statement(),
        "SELECT * FROM events ORDER BY name ASC LIMIT $1"
    );
}

#[test]
fn zero_offset_and_limit_are_no_ops() {
    let base = SelectStatementBuilder::new("*", "events");

    assert_eq!(base.add_offset(0).add_limit(0), base);
}
