use foo_store::prelude::*;

const BASE: &str = "SELECT id, value, timestamp FROM foo";

fn build(opts: &FooListOptions, style: PlaceholderStyle) -> (String, Vec<RowValues>) {
    let mut wheres = Wheres::with_style(style);
    opts.apply(&mut wheres);
    let (conditions, params) = wheres.into_parts();
    (
        build_statement(BASE, &conditions, &opts.page.clause()),
        params,
    )
}

#[test]
fn empty_filter_is_base_query() {
    let (sql, params) = build(&FooListOptions::default(), PlaceholderStyle::Question);
    assert_eq!(sql, BASE);
    assert!(params.is_empty());
}

#[test]
fn in_clause_has_one_placeholder_per_id() {
    for n in 1..=5_i64 {
        let ids: Vec<i64> = (0..n).map(|i| 100 - i).collect();
        let opts = FooListOptions {
            ids: ids.clone(),
            ..Default::default()
        };
        let (sql, params) = build(&opts, PlaceholderStyle::Question);

        let markers = vec!["?"; ids.len()].join(",");
        assert_eq!(sql, format!("{BASE} WHERE id IN ({markers})"));
        let bound: Vec<i64> = params.iter().filter_map(|p| p.as_int().copied()).collect();
        assert_eq!(bound, ids);
    }
}

#[test]
fn ids_then_value_in_every_style() {
    let opts = FooListOptions {
        ids: vec![3, 7, 9],
        value: "hello".to_string(),
        ..Default::default()
    };
    let expected_params = vec![
        RowValues::Int(3),
        RowValues::Int(7),
        RowValues::Int(9),
        RowValues::Text("hello".to_string()),
    ];

    let cases = [
        (PlaceholderStyle::Question, "id IN (?,?,?) AND value = ?"),
        (PlaceholderStyle::Sqlite, "id IN (?1,?2,?3) AND value = ?4"),
        (PlaceholderStyle::Postgres, "id IN ($1,$2,$3) AND value = $4"),
    ];
    for (style, where_clause) in cases {
        let (sql, params) = build(&opts, style);
        assert_eq!(sql, format!("{BASE} WHERE {where_clause}"), "{style:?}");
        assert_eq!(params, expected_params, "{style:?}");
    }
}

#[test]
fn rebinding_canonical_form_matches_numbered_build() {
    let opts = FooListOptions {
        ids: vec![3, 7, 9],
        value: "hello".to_string(),
        page: Page::new(10, 2),
    };
    let (canonical, _) = build(&opts, PlaceholderStyle::Question);
    for style in [PlaceholderStyle::Sqlite, PlaceholderStyle::Postgres] {
        let (numbered, _) = build(&opts, style);
        assert_eq!(rebind(&canonical, style), numbered);
    }
}

#[test]
fn pagination_clause() {
    assert_eq!(Page::new(10, 0).clause(), "LIMIT 10 OFFSET 0");
    assert_eq!(Page::new(10, 2).clause(), "LIMIT 10 OFFSET 20");
    assert_eq!(Page::new(0, 5).clause(), "");

    let opts = FooListOptions {
        value: "hello".to_string(),
        page: Page::new(10, 2),
        ..Default::default()
    };
    let (sql, _) = build(&opts, PlaceholderStyle::Question);
    assert_eq!(sql, format!("{BASE} WHERE value = ? LIMIT 10 OFFSET 20"));
}

#[test]
fn identical_inputs_build_identical_output() {
    let opts = FooListOptions {
        ids: vec![5, 1, 5],
        value: "x".to_string(),
        page: Page::new(3, 1),
    };
    for style in [
        PlaceholderStyle::Question,
        PlaceholderStyle::Sqlite,
        PlaceholderStyle::Postgres,
    ] {
        assert_eq!(build(&opts, style), build(&opts.clone(), style));
    }
}

#[test]
fn merged_filters_keep_ordinals_aligned() {
    let first = FooListOptions {
        ids: vec![1, 2],
        ..Default::default()
    };
    let second = FooListOptions {
        ids: vec![2, 3],
        value: "hello".to_string(),
        ..Default::default()
    };

    let mut wheres = Wheres::with_style(PlaceholderStyle::Postgres);
    first.apply(&mut wheres);
    second.apply(&mut wheres);

    let sql = build_statement(BASE, wheres.conditions(), "");
    assert_eq!(
        sql,
        format!("{BASE} WHERE id IN ($1,$2) AND id IN ($3,$4) AND value = $5")
    );
    assert_eq!(wheres.params().len(), 5);
    assert_eq!(wheres.params()[4], RowValues::Text("hello".to_string()));
}

#[test]
fn decoded_query_builds_expected_statement() -> Result<(), Box<dyn std::error::Error>> {
    let opts = decode_query("id=2&id=4&value=hello+world+2&page_size=10&page=0")?;
    let (sql, params) = build(&opts, PlaceholderStyle::Question);
    assert_eq!(
        sql,
        format!("{BASE} WHERE id IN (?,?) AND value = ? LIMIT 10 OFFSET 0")
    );
    assert_eq!(params[2], RowValues::Text("hello world 2".to_string()));
    Ok(())
}
