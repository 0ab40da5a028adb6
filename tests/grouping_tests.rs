use scatterplot_rs::core::{CountryRecord, group_by_year};

fn row(country: &str, year: i32) -> CountryRecord {
    CountryRecord::new(country, "America", year, 1000.0, 10.0, 1.0)
}

#[test]
fn buckets_partition_the_input() {
    let rows = vec![
        row("A", 2000),
        row("B", 2001),
        row("C", 2000),
        row("D", 2002),
        row("E", 2001),
    ];
    let total = rows.len();

    let groups = group_by_year(rows);

    let flattened: usize = groups.values().map(Vec::len).sum();
    assert_eq!(flattened, total);
    for (year, bucket) in &groups {
        assert!(!bucket.is_empty());
        for record in bucket {
            assert_eq!(record.year, *year);
        }
    }
}

#[test]
fn bucket_keys_appear_in_first_seen_order() {
    let rows = vec![row("A", 2002), row("B", 2000), row("C", 2002), row("D", 2001)];

    let groups = group_by_year(rows);
    let years: Vec<i32> = groups.keys().copied().collect();
    assert_eq!(years, vec![2002, 2000, 2001]);
}

#[test]
fn rows_keep_source_order_within_a_bucket() {
    let rows = vec![row("A", 2000), row("B", 2001), row("C", 2000), row("D", 2000)];

    let groups = group_by_year(rows);
    let names: Vec<&str> = groups[&2000].iter().map(|r| r.country.as_str()).collect();
    assert_eq!(names, vec!["A", "C", "D"]);
}

#[test]
fn empty_input_yields_empty_groups() {
    let groups = group_by_year(Vec::new());
    assert!(groups.is_empty());
}

#[test]
fn grouping_is_deterministic() {
    let rows = vec![row("A", 2001), row("B", 2000), row("C", 2001)];

    let first = group_by_year(rows.clone());
    let second = group_by_year(rows);
    assert_eq!(first, second);
}
