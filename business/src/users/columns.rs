//! Column definitions for the users table.
//!
//! A column's header and cell are either fixed content or a function of
//! the row/view. Both resolve to plain data here, so the UI layer only ever
//! draws [`HeaderContent`] and [`CellContent`].

use super::record::{Role, UserId, UserRecord, UserStatus};
use super::view_state::{Column, SortDirection, ViewState};

/// Fixed content, or content computed from a context.
#[derive(Debug, Clone)]
pub enum ColumnRenderer<C, T> {
    Static(T),
    Dynamic(fn(&C) -> T),
}

impl<C, T: Clone> ColumnRenderer<C, T> {
    pub fn resolve(&self, ctx: &C) -> T {
        match self {
            Self::Static(content) => content.clone(),
            Self::Dynamic(render) => render(ctx),
        }
    }
}

/// What a header renderer gets to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCtx {
    pub column: Column,
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderContent {
    Label(String),
    SortToggle {
        label: String,
        direction: Option<SortDirection>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Primary,
    Secondary,
    Outline,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(String),
    Badge { text: String, tone: BadgeTone },
    RowActions { id: UserId },
}

impl CellContent {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Badge { text, .. } => text,
            Self::RowActions { .. } => "",
        }
    }
}

pub type HeaderRenderer = ColumnRenderer<HeaderCtx, HeaderContent>;
pub type CellRenderer = ColumnRenderer<UserRecord, CellContent>;

#[derive(Debug, Clone, bon::Builder)]
pub struct ColumnDef {
    pub column: Column,
    pub header: HeaderRenderer,
    /// Falls back to the column's text value when unset.
    pub cell: Option<CellRenderer>,
}

impl ColumnDef {
    pub fn resolve_header(&self, view: &ViewState) -> HeaderContent {
        self.header.resolve(&HeaderCtx {
            column: self.column,
            sort: view.sort_direction(self.column),
        })
    }

    pub fn resolve_cell(&self, record: &UserRecord) -> CellContent {
        match &self.cell {
            Some(renderer) => renderer.resolve(record),
            None => CellContent::Text(self.column.value(record).to_owned()),
        }
    }
}

pub fn role_tone(role: Role) -> BadgeTone {
    match role {
        Role::Admin => BadgeTone::Primary,
        Role::Student => BadgeTone::Secondary,
    }
}

pub fn status_tone(status: UserStatus) -> BadgeTone {
    match status {
        UserStatus::Active => BadgeTone::Outline,
        UserStatus::Inactive => BadgeTone::Destructive,
    }
}

fn sort_toggle(ctx: &HeaderCtx) -> HeaderContent {
    HeaderContent::SortToggle {
        label: ctx.column.label().to_owned(),
        direction: ctx.sort,
    }
}

fn role_badge(record: &UserRecord) -> CellContent {
    CellContent::Badge {
        text: record.role.as_str().to_owned(),
        tone: role_tone(record.role),
    }
}

fn status_badge(record: &UserRecord) -> CellContent {
    CellContent::Badge {
        text: record.status.as_str().to_owned(),
        tone: status_tone(record.status),
    }
}

fn row_actions(record: &UserRecord) -> CellContent {
    CellContent::RowActions { id: record.id }
}

/// Name, Email, Role, Status, Actions.
pub fn default_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::builder()
            .column(Column::Name)
            .header(ColumnRenderer::Dynamic(sort_toggle))
            .build(),
        ColumnDef::builder()
            .column(Column::Email)
            .header(ColumnRenderer::Dynamic(sort_toggle))
            .build(),
        ColumnDef::builder()
            .column(Column::Role)
            .header(ColumnRenderer::Dynamic(sort_toggle))
            .cell(ColumnRenderer::Dynamic(role_badge))
            .build(),
        ColumnDef::builder()
            .column(Column::Status)
            .header(ColumnRenderer::Dynamic(sort_toggle))
            .cell(ColumnRenderer::Dynamic(status_badge))
            .build(),
        ColumnDef::builder()
            .column(Column::Actions)
            .header(ColumnRenderer::Static(HeaderContent::Label(String::new())))
            .cell(ColumnRenderer::Dynamic(row_actions))
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::record::seed_users;

    #[test]
    fn badges_carry_tones() {
        let columns = default_columns();
        let records = seed_users();
        let role = &columns[2];
        let status = &columns[3];

        // Jane is an active admin, Bob an inactive student
        assert_eq!(
            role.resolve_cell(&records[1]),
            CellContent::Badge {
                text: "Admin".to_owned(),
                tone: BadgeTone::Primary
            }
        );
        assert_eq!(
            role.resolve_cell(&records[2]),
            CellContent::Badge {
                text: "Student".to_owned(),
                tone: BadgeTone::Secondary
            }
        );
        assert_eq!(
            status.resolve_cell(&records[1]),
            CellContent::Badge {
                text: "Active".to_owned(),
                tone: BadgeTone::Outline
            }
        );
        assert_eq!(
            status.resolve_cell(&records[2]),
            CellContent::Badge {
                text: "Inactive".to_owned(),
                tone: BadgeTone::Destructive
            }
        );
    }

    #[test]
    fn missing_cell_renderer_falls_back_to_text() {
        let email = &default_columns()[1];
        assert!(email.cell.is_none());
        assert_eq!(
            email.resolve_cell(&seed_users()[0]),
            CellContent::Text("john@example.com".to_owned())
        );
    }

    #[test]
    fn name_header_reflects_sort_direction() {
        let name = &default_columns()[0];
        let view = ViewState::default().toggle_sort(Column::Name);

        assert_eq!(
            name.resolve_header(&view),
            HeaderContent::SortToggle {
                label: "Name".to_owned(),
                direction: Some(SortDirection::Ascending)
            }
        );
        assert_eq!(
            name.resolve_header(&ViewState::default()),
            HeaderContent::SortToggle {
                label: "Name".to_owned(),
                direction: None
            }
        );
    }

    #[test]
    fn every_value_column_header_is_a_sort_toggle() {
        let view = ViewState::default()
            .toggle_sort(Column::Role)
            .toggle_sort_multi(Column::Email)
            .toggle_sort_multi(Column::Email);

        let headers: Vec<_> = default_columns()
            .iter()
            .map(|def| def.resolve_header(&view))
            .collect();

        assert_eq!(
            headers[1],
            HeaderContent::SortToggle {
                label: "Email".to_owned(),
                direction: Some(SortDirection::Descending)
            }
        );
        assert_eq!(
            headers[2],
            HeaderContent::SortToggle {
                label: "Role".to_owned(),
                direction: Some(SortDirection::Ascending)
            }
        );
        assert_eq!(
            headers[3],
            HeaderContent::SortToggle {
                label: "Status".to_owned(),
                direction: None
            }
        );
        assert_eq!(headers[4], HeaderContent::Label(String::new()));
    }

    #[test]
    fn actions_cell_targets_the_row() {
        let actions = &default_columns()[4];
        assert_eq!(
            actions.resolve_cell(&seed_users()[3]),
            CellContent::RowActions { id: 4 }
        );
    }
}
