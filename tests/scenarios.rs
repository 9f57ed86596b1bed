//! End-to-end scenarios: build tables, partition them, and pin the exact
//! rendered output.

use grouptable::{group_by, render, GroupId, Grouping, Table};

fn presidents() -> Table {
    Table::new()
        .add("name", vec!["Washington", "Adams", "Jefferson"])
        .unwrap()
        .add("terms", vec![2, 1, 2])
        .unwrap()
}

#[test]
fn test_default_render() {
    let text = render::to_string(&presidents(), &[]);
    let want = "\
name       terms
Washington     2
Adams          1
Jefferson      2
";
    assert_eq!(text, want);
}

#[test]
fn test_render_with_templates() {
    let text = render::to_string(&presidents(), &["President %s", "%#x"]);
    let want = "\
name                 terms
President Washington   0x2
President Adams        0x1
President Jefferson    0x2
";
    assert_eq!(text, want);
}

#[test]
fn test_render_grouped() {
    let tab = presidents()
        .add("state", vec!["Virginia", "Massachusetts", "Virginia"])
        .unwrap();
    let by_state = group_by(&tab, "state").unwrap();
    let text = render::to_string(&by_state, &[]);
    let want = "\
name       terms state
-- /0
Washington     2 Virginia
Jefferson      2 Virginia
-- /1
Adams          1 Massachusetts
";
    assert_eq!(text, want);
}

#[test]
fn test_render_empty_table_writes_nothing() {
    let mut sink = Vec::new();
    render::write(&mut sink, &Table::new(), &[]).unwrap();
    assert!(sink.is_empty());
}

#[test]
fn test_render_is_byte_identical_across_calls() {
    let tab = presidents()
        .add("state", vec!["Virginia", "Massachusetts", "Virginia"])
        .unwrap();
    let by_state = group_by(&tab, "state").unwrap();
    assert_eq!(
        render::to_string(&by_state, &["%s", "%d", "%s"]),
        render::to_string(&by_state, &["%s", "%d", "%s"])
    );
}

#[test]
fn test_merge_then_render_groups_in_install_order() {
    let base = Table::new().add("n", vec![1, 2]).unwrap();
    let extra = Table::new().add("n", vec![3]).unwrap();
    let merged = base
        .add_table(&GroupId::root().extend("more"), &extra)
        .unwrap();

    assert_eq!(
        merged.groups(),
        vec![GroupId::root(), GroupId::root().extend("more")]
    );
    let text = render::to_string(&merged, &[]);
    let want = "\
n
-- /
1
2
-- /more
3
";
    assert_eq!(text, want);
}

#[test]
fn test_groupby_then_merge_round_trip() {
    // A group_by view is a Grouping like any other: it can be installed
    // into a fresh table and renders identically afterwards.
    let tab = presidents()
        .add("state", vec!["Virginia", "Massachusetts", "Virginia"])
        .unwrap();
    let by_state = group_by(&tab, "state").unwrap();

    let adopted = Table::new()
        .add_table(&GroupId::root(), &by_state)
        .unwrap();
    assert_eq!(adopted.columns(), by_state.columns());
    assert_eq!(adopted.groups(), by_state.groups());
    assert_eq!(
        render::to_string(&adopted, &[]),
        render::to_string(&by_state, &[])
    );
}
