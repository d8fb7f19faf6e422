//! Carriage rendering
//!
//! Fills the carriage template with one commit's hash, subject and change
//! summary.

use super::format::FieldWidth;
use super::sprites;
use crate::model::{CommitRecord, Sprite};

/// Columns every carriage occupies on the track
pub const CARRIAGE_WIDTH: usize = 46;

/// Minimum alignment applied after fitting a field value
const FIELD_ALIGN: usize = 27;

/// Text slots in the carriage template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarriageField {
    Hash,
    Message,
    Changes,
}

impl CarriageField {
    pub const ALL: [CarriageField; 3] = [
        CarriageField::Hash,
        CarriageField::Message,
        CarriageField::Changes,
    ];

    /// Token marking this field in the template
    pub const fn placeholder(self) -> &'static str {
        match self {
            CarriageField::Hash => "{hash}",
            CarriageField::Message => "{msg}",
            CarriageField::Changes => "{modifications}",
        }
    }
}

/// Fixed-width value for every [`CarriageField`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    hash: String,
    message: String,
    changes: String,
}

impl FieldValues {
    /// Fit each of the commit's fields to the carriage field width
    pub fn for_commit(commit: &CommitRecord) -> Self {
        Self {
            hash: fixed_field(commit.hash()),
            message: fixed_field(commit.summary()),
            changes: fixed_field(commit.changes()),
        }
    }

    pub fn get(&self, field: CarriageField) -> &str {
        match field {
            CarriageField::Hash => &self.hash,
            CarriageField::Message => &self.message,
            CarriageField::Changes => &self.changes,
        }
    }
}

fn fixed_field(value: &str) -> String {
    format!("{:<FIELD_ALIGN$}", FieldWidth::CARRIAGE.fit(value))
}

/// Replace every placeholder in every template line
pub fn fill_template(template: &[&str], values: &FieldValues) -> Vec<String> {
    template.iter().map(|line| fill_line(line, values)).collect()
}

/// Single left-to-right pass, so substituted text is never scanned for tokens
fn fill_line(line: &str, values: &FieldValues) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some((pos, field)) = CarriageField::ALL
        .iter()
        .filter_map(|&field| rest.find(field.placeholder()).map(|pos| (pos, field)))
        .min_by_key(|&(pos, _)| pos)
    {
        out.push_str(&rest[..pos]);
        out.push_str(values.get(field));
        rest = &rest[pos + field.placeholder().len()..];
    }

    out.push_str(rest);
    out
}

/// Render the carriage for one commit
pub fn render_carriage(commit: &CommitRecord) -> Sprite {
    let values = FieldValues::for_commit(commit);
    Sprite::new(fill_template(sprites::CARRIAGE, &values))
}
