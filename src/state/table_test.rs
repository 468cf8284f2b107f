use super::*;
use serde::Serialize;
use serde_json::json;

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Person {
    id: u64,
    name: String,
    email: String,
    status: String,
}

fn person(id: u64, name: &str, email: &str, status: &str) -> Person {
    Person {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
        status: status.to_owned(),
    }
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|k| (*k).to_owned()).collect()
}

fn roster(search_keys: &[&str]) -> TableModel<Person> {
    let columns = vec![
        Column::field("name", "Name"),
        Column::field("email", "Email"),
        Column::computed("status", "Status", |p: &Person| p.status.clone()),
    ];
    let mut model = TableModel::new(columns, keys(search_keys));
    model.set_rows(vec![
        person(1, "Alice", "alice@school.test", "Active"),
        person(2, "Bob", "bob@school.test", "Inactive"),
        person(3, "Cara", "cara@school.test", "Active"),
    ]);
    model
}

fn visible_ids(model: &TableModel<Person>) -> Vec<u64> {
    model.view_rows().iter().map(|row| row.record.id).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_matches_exactly_one_row() {
    let mut model = TableModel::new(vec![Column::field("name", "Name")], keys(&["name"]));
    model.set_rows(vec![
        person(1, "Alice", "a@x", "Active"),
        person(2, "Bob", "b@x", "Active"),
    ]);
    model.set_filter("ali");
    assert_eq!(visible_ids(&model), vec![1]);
}

#[test]
fn filter_is_case_insensitive() {
    let mut model = roster(&["name"]);
    model.set_filter("BOB");
    assert_eq!(visible_ids(&model), vec![2]);
}

#[test]
fn filter_matches_any_listed_field() {
    let mut model = roster(&["name", "email"]);
    model.set_filter("cara@");
    assert_eq!(visible_ids(&model), vec![3]);
}

#[test]
fn filter_ignores_fields_outside_search_keys() {
    let mut model = roster(&["name"]);
    model.set_filter("@school.test");
    assert!(visible_ids(&model).is_empty());
}

#[test]
fn empty_search_keys_disable_filtering_entirely() {
    let mut model = roster(&[]);
    assert!(!model.has_search());
    model.set_filter("zzz nothing matches this");
    assert_eq!(visible_ids(&model), vec![1, 2, 3]);
}

#[test]
fn empty_filter_passes_all_rows() {
    let model = roster(&["name"]);
    assert!(model.has_search());
    assert_eq!(visible_ids(&model), vec![1, 2, 3]);
}

#[test]
fn filter_reaches_nested_fields_by_dot_path() {
    #[derive(Clone, Serialize)]
    struct Row {
        id: u64,
        student: Person,
    }
    let mut model = TableModel::new(
        vec![Column::field("student.name", "Student")],
        keys(&["student.name"]),
    );
    model.set_rows(vec![
        Row { id: 1, student: person(10, "Alice", "a@x", "Active") },
        Row { id: 2, student: person(20, "Bob", "b@x", "Active") },
    ]);
    model.set_filter("bo");

    let rows = model.view_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cells[0].text, "Bob");
}

#[test]
fn numeric_fields_are_string_coerced_for_filtering() {
    let mut model = TableModel::new(vec![Column::field("id", "Id")], keys(&["id"]));
    model.set_rows(vec![
        person(41, "x", "x@x", "Active"),
        person(52, "y", "y@x", "Active"),
    ]);
    model.set_filter("52");
    assert_eq!(visible_ids(&model), vec![52]);
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn default_order_is_insertion_order() {
    let model = roster(&[]);
    assert_eq!(model.sort(), None);
    assert_eq!(visible_ids(&model), vec![1, 2, 3]);
}

#[test]
fn toggle_cycles_ascending_descending_off() {
    let mut model = roster(&[]);

    model.toggle_sort("name");
    assert_eq!(model.sort(), Some(("name", SortDir::Asc)));
    assert_eq!(visible_ids(&model), vec![1, 2, 3]);

    model.toggle_sort("name");
    assert_eq!(model.sort(), Some(("name", SortDir::Desc)));
    assert_eq!(visible_ids(&model), vec![3, 2, 1]);

    model.toggle_sort("name");
    assert_eq!(model.sort(), None);
    assert_eq!(visible_ids(&model), vec![1, 2, 3]);
}

#[test]
fn switching_columns_restarts_at_ascending() {
    let mut model = roster(&[]);
    model.toggle_sort("name");
    model.toggle_sort("name");
    assert_eq!(model.sort(), Some(("name", SortDir::Desc)));

    model.toggle_sort("email");
    assert_eq!(model.sort(), Some(("email", SortDir::Asc)));
}

#[test]
fn numeric_fields_sort_numerically() {
    let mut model = TableModel::new(vec![Column::field("id", "Id")], Vec::new());
    model.set_rows(vec![
        person(10, "a", "a@x", "Active"),
        person(2, "b", "b@x", "Active"),
        person(1, "c", "c@x", "Active"),
    ]);
    model.toggle_sort("id");
    // 1, 2, 10 — not the lexicographic 1, 10, 2.
    assert_eq!(visible_ids(&model), vec![1, 2, 10]);
}

#[test]
fn computed_columns_sort_by_their_rendered_text() {
    let mut model = roster(&[]);
    model.toggle_sort("status");
    // Active, Active, Inactive — stable, so 1 before 3.
    assert_eq!(visible_ids(&model), vec![1, 3, 2]);
}

#[test]
fn rows_missing_the_sort_field_sort_last_ascending_first_descending() {
    let mut model = TableModel::new(vec![Column::field("name", "Name")], Vec::new());
    model.set_rows(vec![
        json!({"id": 1}),
        json!({"id": 2, "name": "Alpha"}),
    ]);

    model.toggle_sort("name");
    let rows = model.view_rows();
    assert_eq!(rows[0].cells[0].text, "Alpha");
    assert_eq!(rows[1].cells[0].text, "");

    model.toggle_sort("name");
    let rows = model.view_rows();
    assert_eq!(rows[0].cells[0].text, "");
    assert_eq!(rows[1].cells[0].text, "Alpha");
}

#[test]
fn sorting_composes_with_filtering() {
    let mut model = roster(&["status"]);
    model.set_filter("active");
    model.toggle_sort("name");
    model.toggle_sort("name");
    // "active" is a substring of "Inactive" too, so all three match.
    assert_eq!(visible_ids(&model), vec![3, 2, 1]);
}

// =============================================================
// Cells and columns
// =============================================================

#[test]
fn cells_follow_column_order() {
    let model = roster(&[]);
    let rows = model.view_rows();
    assert_eq!(rows[0].cells.len(), 3);
    assert_eq!(rows[0].cells[0].text, "Alice");
    assert_eq!(rows[0].cells[1].text, "alice@school.test");
    assert_eq!(rows[0].cells[2].text, "Active");
}

#[test]
fn missing_field_renders_empty_text() {
    let mut model = TableModel::new(vec![Column::field("nope", "Nope")], Vec::new());
    model.set_rows(vec![person(1, "a", "a@x", "Active")]);
    assert_eq!(model.view_rows()[0].cells[0].text, "");
}

#[test]
fn cell_class_function_is_applied_per_row() {
    let column = Column::computed("status", "Status", |p: &Person| p.status.clone())
        .with_class(|p: &Person| {
            if p.status == "Active" {
                "badge badge--ok".to_owned()
            } else {
                "badge badge--off".to_owned()
            }
        });
    let mut model = TableModel::new(vec![column], Vec::new());
    model.set_rows(vec![
        person(1, "a", "a@x", "Active"),
        person(2, "b", "b@x", "Inactive"),
    ]);

    let rows = model.view_rows();
    assert_eq!(rows[0].cells[0].class.as_deref(), Some("badge badge--ok"));
    assert_eq!(rows[1].cells[0].class.as_deref(), Some("badge badge--off"));
}

#[test]
fn field_columns_default_their_id_to_the_path() {
    let column: Column<Person> = Column::field("student.name", "Student");
    assert_eq!(column.id(), "student.name");
    assert_eq!(column.header(), "Student");
}

// =============================================================
// Row ownership
// =============================================================

#[test]
fn model_never_mutates_its_rows() {
    let original = vec![
        person(1, "Alice", "alice@school.test", "Active"),
        person(2, "Bob", "bob@school.test", "Inactive"),
        person(3, "Cara", "cara@school.test", "Active"),
    ];
    let mut model = roster(&["name"]);
    model.set_filter("ali");
    model.toggle_sort("email");
    let _ = model.view_rows();

    assert_eq!(model.rows(), original.as_slice());
}

#[test]
fn set_rows_replaces_the_collection_wholesale() {
    let mut model = roster(&[]);
    model.set_rows(vec![person(9, "Zed", "z@x", "Active")]);
    assert_eq!(visible_ids(&model), vec![9]);
}

// =============================================================
// Actions column synthesis
// =============================================================

#[test]
fn no_callbacks_means_no_actions_column() {
    assert_eq!(action_column(false, false), None);
}

#[test]
fn edit_only_yields_one_control() {
    let actions = action_column(true, false).expect("column");
    assert_eq!(actions.control_count(), 1);
    assert!(actions.edit);
    assert!(!actions.delete);
}

#[test]
fn both_callbacks_yield_two_controls() {
    let actions = action_column(true, true).expect("column");
    assert_eq!(actions.control_count(), 2);
}
