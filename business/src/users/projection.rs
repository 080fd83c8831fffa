//! Filtered, sorted and paginated view of the record store.
//!
//! [`project`] is pure. [`UsersTableCompute`] re-runs it whenever the store,
//! the view state or the config changes, so the table never holds a row the
//! store no longer has.

use std::any::{Any, TypeId};
use std::cmp::Ordering;

use roster_states::{Compute, ComputeDeps, Dep, Updater};

use super::columns::{CellContent, ColumnDef, HeaderContent, default_columns};
use super::record::{UserId, UserRecord};
use super::store::RecordStore;
use super::view_state::{Column, SortDirection, SortKey, UsersViewState, ViewState};
use crate::RosterConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectedRow {
    pub id: UserId,
    /// One entry per visible column, same order as the headers.
    pub cells: Vec<CellContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    headers: Vec<(Column, HeaderContent)>,
    rows: Vec<ProjectedRow>,
    page: usize,
    page_count: usize,
    filtered_len: usize,
}

impl Projection {
    pub fn headers(&self) -> &[(Column, HeaderContent)] {
        &self.headers
    }

    pub fn rows(&self) -> &[ProjectedRow] {
        &self.rows
    }

    pub fn row_ids(&self) -> Vec<UserId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    /// The page actually shown, clamped to the last page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// At least 1, so an empty table still reads "page 1 of 1".
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Rows left after filtering, across all pages.
    pub fn filtered_len(&self) -> usize {
        self.filtered_len
    }

    pub fn can_go_next(&self) -> bool {
        self.page + 1 < self.page_count
    }

    pub fn can_go_previous(&self) -> bool {
        self.page > 0
    }
}

fn matches_filters(record: &UserRecord, view: &ViewState) -> bool {
    view.filters().iter().all(|(column, needle)| {
        column
            .value(record)
            .to_lowercase()
            .contains(&needle.to_lowercase())
    })
}

fn compare(a: &UserRecord, b: &UserRecord, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let ord = key
            .column
            .value(a)
            .to_lowercase()
            .cmp(&key.column.value(b).to_lowercase());
        let ord = match key.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Projects `records` (in store order) through `view` with the default
/// columns.
pub fn project(records: &[UserRecord], view: &ViewState, page_size: usize) -> Projection {
    project_with(&default_columns(), records, view, page_size)
}

pub fn project_with(
    columns: &[ColumnDef],
    records: &[UserRecord],
    view: &ViewState,
    page_size: usize,
) -> Projection {
    let page_size = page_size.max(1);

    let mut filtered: Vec<&UserRecord> = records
        .iter()
        .filter(|record| matches_filters(record, view))
        .collect();
    // stable: equal keys keep store order
    filtered.sort_by(|a, b| compare(a, b, view.sort_keys()));

    let filtered_len = filtered.len();
    let page_count = filtered_len.div_ceil(page_size).max(1);
    let page = view.current_page().min(page_count - 1);

    let visible: Vec<&ColumnDef> = columns
        .iter()
        .filter(|def| view.is_visible(def.column))
        .collect();

    let headers = visible
        .iter()
        .map(|def| (def.column, def.resolve_header(view)))
        .collect();

    let rows = filtered
        .into_iter()
        .skip(page * page_size)
        .take(page_size)
        .map(|record| ProjectedRow {
            id: record.id,
            cells: visible.iter().map(|def| def.resolve_cell(record)).collect(),
        })
        .collect();

    Projection {
        headers,
        rows,
        page,
        page_count,
        filtered_len,
    }
}

/// The table as currently shown.
#[derive(Debug, Clone, Default)]
pub struct UsersTableCompute {
    pub projection: Projection,
}

impl Compute for UsersTableCompute {
    fn deps(&self) -> ComputeDeps {
        const STATE_IDS: [TypeId; 3] = [
            TypeId::of::<RecordStore>(),
            TypeId::of::<UsersViewState>(),
            TypeId::of::<RosterConfig>(),
        ];
        (&STATE_IDS, &[])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let store = deps.get_state_ref::<RecordStore>();
        let view = deps.get_state_ref::<UsersViewState>();
        let config = deps.get_state_ref::<RosterConfig>();

        updater.set(UsersTableCompute {
            projection: project(store.list(), &view.0, config.page_size()),
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
