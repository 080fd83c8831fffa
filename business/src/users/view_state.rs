//! View state for the users table.
//!
//! `ViewState` is an immutable value: every operation returns the next
//! state instead of mutating, so the UI swaps it wholesale and the
//! projection compute sees a single dirty write.

use std::collections::{BTreeMap, BTreeSet};

use roster_states::State;

use super::record::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Name,
    Email,
    Role,
    Status,
    Actions,
}

impl Column {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Role,
        Self::Status,
        Self::Actions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
            Self::Status => "Status",
            Self::Actions => "Actions",
        }
    }

    /// Columns backed by a record field; these can be filtered and sorted.
    pub fn has_value(self) -> bool {
        !matches!(self, Self::Actions)
    }

    /// Display text of this column for `record`, empty for `Actions`.
    pub fn value(self, record: &UserRecord) -> &str {
        match self {
            Self::Name => &record.name,
            Self::Email => &record.email,
            Self::Role => record.role.as_str(),
            Self::Status => record.status.as_str(),
            Self::Actions => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "⬆",
            Self::Descending => "⬇",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: Column,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    sort_keys: Vec<SortKey>,
    filters: BTreeMap<Column, String>,
    visible_columns: BTreeSet<Column>,
    current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            sort_keys: Vec::new(),
            filters: BTreeMap::new(),
            visible_columns: Column::ALL.into_iter().collect(),
            current_page: 0,
        }
    }
}

/// asc -> desc -> none
fn cycle(direction: Option<SortDirection>) -> Option<SortDirection> {
    match direction {
        None => Some(SortDirection::Ascending),
        Some(SortDirection::Ascending) => Some(SortDirection::Descending),
        Some(SortDirection::Descending) => None,
    }
}

impl ViewState {
    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    pub fn sort_direction(&self, column: Column) -> Option<SortDirection> {
        self.sort_keys
            .iter()
            .find(|k| k.column == column)
            .map(|k| k.direction)
    }

    pub fn filters(&self) -> &BTreeMap<Column, String> {
        &self.filters
    }

    pub fn filter(&self, column: Column) -> &str {
        self.filters.get(&column).map_or("", String::as_str)
    }

    pub fn visible_columns(&self) -> &BTreeSet<Column> {
        &self.visible_columns
    }

    pub fn is_visible(&self, column: Column) -> bool {
        self.visible_columns.contains(&column)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Sets (or, with an empty value, removes) the filter on `column` and
    /// goes back to the first page.
    pub fn with_filter(&self, column: Column, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        if !column.has_value() {
            return next;
        }
        let value = value.into();
        if value.is_empty() {
            next.filters.remove(&column);
        } else {
            next.filters.insert(column, value);
        }
        next.current_page = 0;
        next
    }

    pub fn clear_filters(&self) -> Self {
        let mut next = self.clone();
        next.filters.clear();
        next.current_page = 0;
        next
    }

    /// Single-column sort: cycles `column` asc -> desc -> none and drops
    /// every other key.
    pub fn toggle_sort(&self, column: Column) -> Self {
        let mut next = self.clone();
        if !column.has_value() {
            return next;
        }
        next.sort_keys = cycle(self.sort_direction(column))
            .map(|direction| SortKey { column, direction })
            .into_iter()
            .collect();
        next.current_page = 0;
        next
    }

    /// Multi-column sort: cycles `column` in place, appending it as the
    /// lowest priority key when it is not sorted yet.
    pub fn toggle_sort_multi(&self, column: Column) -> Self {
        let mut next = self.clone();
        if !column.has_value() {
            return next;
        }
        match next.sort_keys.iter().position(|k| k.column == column) {
            Some(pos) => match cycle(Some(next.sort_keys[pos].direction)) {
                Some(direction) => next.sort_keys[pos].direction = direction,
                None => {
                    next.sort_keys.remove(pos);
                }
            },
            None => next.sort_keys.push(SortKey {
                column,
                direction: SortDirection::Ascending,
            }),
        }
        next.current_page = 0;
        next
    }

    pub fn with_column_visible(&self, column: Column, visible: bool) -> Self {
        let mut next = self.clone();
        if visible {
            next.visible_columns.insert(column);
        } else {
            next.visible_columns.remove(&column);
        }
        next
    }

    pub fn with_page(&self, page: usize) -> Self {
        let mut next = self.clone();
        next.current_page = page;
        next
    }

    pub fn next_page(&self) -> Self {
        self.with_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(&self) -> Self {
        self.with_page(self.current_page.saturating_sub(1))
    }
}

/// The table's current `ViewState`, as registered in `StateCtx`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersViewState(pub ViewState);

impl State for UsersViewState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_toggle_cycles_asc_desc_none() {
        let view = ViewState::default();

        let asc = view.toggle_sort(Column::Name);
        assert_eq!(asc.sort_direction(Column::Name), Some(SortDirection::Ascending));

        let desc = asc.toggle_sort(Column::Name);
        assert_eq!(desc.sort_direction(Column::Name), Some(SortDirection::Descending));

        let none = desc.toggle_sort(Column::Name);
        assert!(none.sort_keys().is_empty());
    }

    #[test]
    fn single_sort_replaces_other_keys() {
        let view = ViewState::default()
            .toggle_sort(Column::Name)
            .toggle_sort(Column::Email);

        assert_eq!(
            view.sort_keys(),
            &[SortKey {
                column: Column::Email,
                direction: SortDirection::Ascending
            }]
        );
    }

    #[test]
    fn multi_sort_keeps_priority_order() {
        let view = ViewState::default()
            .toggle_sort_multi(Column::Role)
            .toggle_sort_multi(Column::Name)
            .toggle_sort_multi(Column::Role);

        let columns: Vec<_> = view.sort_keys().iter().map(|k| k.column).collect();
        assert_eq!(columns, vec![Column::Role, Column::Name]);
        assert_eq!(view.sort_direction(Column::Role), Some(SortDirection::Descending));

        let cleared = view.toggle_sort_multi(Column::Role);
        let columns: Vec<_> = cleared.sort_keys().iter().map(|k| k.column).collect();
        assert_eq!(columns, vec![Column::Name]);
    }

    #[test]
    fn actions_column_is_neither_sortable_nor_filterable() {
        let view = ViewState::default()
            .toggle_sort(Column::Actions)
            .with_filter(Column::Actions, "x");
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn filter_resets_page_and_empty_value_removes_it() {
        let view = ViewState::default().with_page(3).with_filter(Column::Name, "jane");
        assert_eq!(view.current_page(), 0);
        assert_eq!(view.filter(Column::Name), "jane");

        let cleared = view.with_filter(Column::Name, "");
        assert!(cleared.filters().is_empty());
    }

    #[test]
    fn operations_leave_the_receiver_untouched() {
        let view = ViewState::default();
        let _ = view.toggle_sort(Column::Name).with_filter(Column::Email, "a");
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn column_visibility_round_trips() {
        let hidden = ViewState::default().with_column_visible(Column::Email, false);
        assert!(!hidden.is_visible(Column::Email));
        assert!(hidden.with_column_visible(Column::Email, true).is_visible(Column::Email));
    }

    #[test]
    fn previous_page_saturates_at_zero() {
        assert_eq!(ViewState::default().previous_page().current_page(), 0);
    }
}
