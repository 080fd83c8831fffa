//! Form editor state for the create/edit user dialog.
//!
//! The editor owns a draft copy, never the record itself. Nothing reaches
//! the [`RecordStore`](super::RecordStore) until `SaveUserCommand` commits.

use std::collections::BTreeMap;
use std::fmt;

use roster_states::State;

use super::record::{Role, UserId, UserRecord, UserStatus};

/// Unsaved, editable copy of a record.
///
/// `target_id` is `None` while creating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftRecord {
    pub target_id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

impl DraftRecord {
    /// Empty draft for "create" mode.
    pub fn for_create() -> Self {
        Self::default()
    }

    /// Snapshot of `record` for "edit" mode.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            target_id: Some(record.id),
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role,
            status: record.status,
        }
    }

    /// Checks the required fields, trimming whitespace first.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.name.trim().is_empty() {
            errors.insert(DraftField::Name, "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(DraftField::Email, "Email is required");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Name,
    Email,
}

/// Field-level messages shown under the dialog inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<DraftField, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, message) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Closed,
    OpenCreate,
    OpenEdit(UserId),
    /// Momentary, while a save is being committed.
    Saving,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEditor {
    mode: FormMode,
    draft: DraftRecord,
    errors: ValidationErrors,
}

impl FormEditor {
    pub fn open_create() -> Self {
        Self {
            mode: FormMode::OpenCreate,
            draft: DraftRecord::for_create(),
            errors: ValidationErrors::default(),
        }
    }

    pub fn open_edit(record: &UserRecord) -> Self {
        Self {
            mode: FormMode::OpenEdit(record.id),
            draft: DraftRecord::from_record(record),
            errors: ValidationErrors::default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.mode, FormMode::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::OpenEdit(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit User"
        } else {
            "Add New User"
        }
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut DraftRecord {
        &mut self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Same draft with `errors` attached, still open.
    pub fn with_errors(&self, errors: ValidationErrors) -> Self {
        Self {
            errors,
            ..self.clone()
        }
    }

    pub fn saving(&self) -> Self {
        Self {
            mode: FormMode::Saving,
            ..self.clone()
        }
    }
}

impl State for FormEditor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::record::seed_users;

    #[test]
    fn blank_draft_reports_both_fields() {
        let errors = DraftRecord::for_create()
            .validate()
            .expect_err("empty draft is invalid");

        assert_eq!(errors.get(DraftField::Name), Some("Name is required"));
        assert_eq!(errors.get(DraftField::Email), Some("Email is required"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let draft = DraftRecord {
            name: "   ".to_owned(),
            email: "a@b.c".to_owned(),
            ..DraftRecord::default()
        };
        let errors = draft.validate().expect_err("blank name is invalid");
        assert!(errors.get(DraftField::Name).is_some());
        assert!(errors.get(DraftField::Email).is_none());
    }

    #[test]
    fn edit_seeds_from_the_record() {
        let records = seed_users();
        let editor = FormEditor::open_edit(&records[2]);

        assert_eq!(editor.mode(), FormMode::OpenEdit(3));
        assert_eq!(editor.draft().name, "Bob Johnson");
        assert_eq!(editor.draft().status, UserStatus::Inactive);
        assert_eq!(editor.title(), "Edit User");
    }

    #[test]
    fn create_defaults_to_active_student() {
        let editor = FormEditor::open_create();
        assert!(editor.is_open());
        assert_eq!(editor.draft().role, Role::Student);
        assert_eq!(editor.draft().status, UserStatus::Active);
        assert_eq!(editor.draft().target_id, None);
    }

    #[test]
    fn default_editor_is_closed() {
        assert!(!FormEditor::default().is_open());
    }
}
