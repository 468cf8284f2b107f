//! Headless model behind the generic data grid.
//!
//! Owns the row collection, the column schema, the global filter and the
//! sort state, and computes the visible rows. Records are addressed by
//! dot-path into their serialized form, so columns and search keys use the
//! same field names the backend sends, while the row type itself stays
//! statically typed.
//!
//! The model never mutates the records it is given: create/update/delete go
//! through the owning page, which refetches and replaces the rows wholesale
//! via [`TableModel::set_rows`].

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

type CellFn<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// How a column produces its cell text.
pub enum CellSource<R> {
    /// Dot-path into the record's serialized form (e.g. `student.name`).
    Field(String),
    /// Synthetic cell computed from the record, with no backing field.
    Computed(CellFn<R>),
}

impl<R> Clone for CellSource<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(path) => Self::Field(path.clone()),
            Self::Computed(cell) => Self::Computed(Arc::clone(cell)),
        }
    }
}

/// One column: unique id, header text, cell source, and an optional per-cell
/// class for badge styling. Order within the schema is display order.
pub struct Column<R> {
    id: String,
    header: String,
    source: CellSource<R>,
    class: Option<CellFn<R>>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            source: self.source.clone(),
            class: self.class.as_ref().map(Arc::clone),
        }
    }
}

impl<R> Column<R> {
    /// Column backed by a record field; the dot-path doubles as the id.
    pub fn field(path: impl Into<String>, header: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            id: path.clone(),
            header: header.into(),
            source: CellSource::Field(path),
            class: None,
        }
    }

    /// Synthetic column with no backing field.
    pub fn computed(
        id: impl Into<String>,
        header: impl Into<String>,
        cell: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            source: CellSource::Computed(Arc::new(cell)),
            class: None,
        }
    }

    /// Attach a class function, e.g. a status badge color.
    #[must_use]
    pub fn with_class(mut self, class: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.class = Some(Arc::new(class));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn header(&self) -> &str {
        &self.header
    }
}

/// Direction of the active sort column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Sort {
    column: String,
    dir: SortDir,
}

/// One visible row: the record plus its rendered cells in column order.
#[derive(Clone)]
pub struct RowView<R> {
    pub record: R,
    pub cells: Vec<CellView>,
}

/// Rendered cell text plus optional class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    pub class: Option<String>,
}

/// Which controls the synthesized trailing actions column carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionColumn {
    pub edit: bool,
    pub delete: bool,
}

impl ActionColumn {
    pub fn control_count(self) -> usize {
        usize::from(self.edit) + usize::from(self.delete)
    }
}

/// An actions column exists only when at least one callback is supplied.
pub fn action_column(has_edit: bool, has_delete: bool) -> Option<ActionColumn> {
    (has_edit || has_delete).then_some(ActionColumn {
        edit: has_edit,
        delete: has_delete,
    })
}

/// Headless table state; see the module docs.
#[derive(Clone)]
pub struct TableModel<R> {
    rows: Vec<R>,
    shadows: Vec<Value>,
    columns: Vec<Column<R>>,
    search_keys: Vec<String>,
    filter: String,
    sort: Option<Sort>,
}

impl<R: Serialize> TableModel<R> {
    pub fn new(columns: Vec<Column<R>>, search_keys: Vec<String>) -> Self {
        Self {
            rows: Vec::new(),
            shadows: Vec::new(),
            columns,
            search_keys,
            filter: String::new(),
            sort: None,
        }
    }

    /// Replace the row collection wholesale (the post-refetch contract).
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.shadows = rows
            .iter()
            .map(|row| serde_json::to_value(row).unwrap_or(Value::Null))
            .collect();
        self.rows = rows;
    }

    /// The collection as handed in, untouched by filtering or sorting.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// The search box is only rendered when there are fields to search.
    pub fn has_search(&self) -> bool {
        !self.search_keys.is_empty()
    }

    /// Cycle the sort state for a column: ascending, descending, off.
    /// Clicking a different column restarts at ascending.
    pub fn toggle_sort(&mut self, column_id: &str) {
        self.sort = match self.sort.take() {
            Some(sort) if sort.column == column_id => match sort.dir {
                SortDir::Asc => Some(Sort {
                    column: sort.column,
                    dir: SortDir::Desc,
                }),
                SortDir::Desc => None,
            },
            _ => Some(Sort {
                column: column_id.to_owned(),
                dir: SortDir::Asc,
            }),
        };
    }

    pub fn sort(&self) -> Option<(&str, SortDir)> {
        self.sort.as_ref().map(|s| (s.column.as_str(), s.dir))
    }

    /// Visible rows after filtering and sorting, cells rendered in column
    /// order. With no active sort, rows keep insertion order; sorting is
    /// stable.
    pub fn view_rows(&self) -> Vec<RowView<R>>
    where
        R: Clone,
    {
        let mut indices: Vec<usize> = (0..self.rows.len())
            .filter(|&index| self.row_matches(index))
            .collect();

        if let Some(sort) = &self.sort {
            if let Some(column) = self.columns.iter().find(|c| c.id == sort.column) {
                indices.sort_by(|&a, &b| {
                    let ord = self.compare_cells(column, a, b);
                    match sort.dir {
                        SortDir::Asc => ord,
                        SortDir::Desc => ord.reverse(),
                    }
                });
            }
        }

        indices
            .into_iter()
            .map(|index| RowView {
                record: self.rows[index].clone(),
                cells: self.cells_for(index),
            })
            .collect()
    }

    /// Case-insensitive substring match over the string-coerced values of
    /// the search-key fields; with no keys the filter is a no-op.
    fn row_matches(&self, index: usize) -> bool {
        if self.search_keys.is_empty() || self.filter.is_empty() {
            return true;
        }
        let needle = self.filter.to_lowercase();
        self.search_keys.iter().any(|key| {
            lookup(&self.shadows[index], key)
                .map(coerce_text)
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
    }

    fn compare_cells(&self, column: &Column<R>, a: usize, b: usize) -> Ordering {
        match &column.source {
            CellSource::Field(path) => value_cmp(
                lookup(&self.shadows[a], path),
                lookup(&self.shadows[b], path),
            ),
            CellSource::Computed(cell) => {
                let left = cell(&self.rows[a]).to_lowercase();
                let right = cell(&self.rows[b]).to_lowercase();
                left.cmp(&right)
            }
        }
    }

    fn cells_for(&self, index: usize) -> Vec<CellView> {
        self.columns
            .iter()
            .map(|column| {
                let text = match &column.source {
                    CellSource::Field(path) => lookup(&self.shadows[index], path)
                        .map(coerce_text)
                        .unwrap_or_default(),
                    CellSource::Computed(cell) => cell(&self.rows[index]),
                };
                let class = column.class.as_ref().map(|f| f(&self.rows[index]));
                CellView { text, class }
            })
            .collect()
    }
}

/// Resolve a dot-path against a serialized record.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// String coercion used for filtering and field cells.
fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Field ordering: numbers numerically, everything else as case-folded text.
/// Missing fields sort last in ascending order (and so first when the
/// direction is reversed).
fn value_cmp(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .unwrap_or(f64::NAN)
            .partial_cmp(&y.as_f64().unwrap_or(f64::NAN))
            .unwrap_or(Ordering::Equal),
        (Some(x), Some(y)) => coerce_text(x)
            .to_lowercase()
            .cmp(&coerce_text(y).to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
