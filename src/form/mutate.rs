//! In-place growth and shrink operations for list-shaped fields, plus
//! the one cross-field recompute: rebuilding an instrument's label grid
//! from its string properties.

use crate::error::Error;
use crate::form::value::parse_leading_int;
use crate::form::{FieldValue, Instance, StringNote};

impl FieldValue {
    /// Inserts a blank element before position `index`. Returns `false`
    /// for non-list fields, which have no element rows.
    pub fn insert_above(&mut self, index: usize) -> bool {
        match self {
            Self::TextList(items) => {
                let index = index.min(items.len());
                items.insert(index, String::new());
            }
            Self::IntegerList(items) => {
                let index = index.min(items.len());
                items.insert(index, "0".to_string());
            }
            Self::StringNotes(notes) => {
                let index = index.min(notes.len());
                notes.insert(index, StringNote::blank());
            }
            _ => return false,
        }
        true
    }

    /// Appends a blank element after the last row, the trailing "add new
    /// element" affordance's position.
    pub fn append(&mut self) -> bool {
        let end = match self {
            Self::TextList(items) => items.len(),
            Self::IntegerList(items) => items.len(),
            Self::StringNotes(notes) => notes.len(),
            _ => return false,
        };
        self.insert_above(end)
    }

    /// Removes the element row at `index`. Untouched elements keep their
    /// relative order.
    pub fn remove_element(&mut self, index: usize) -> bool {
        match self {
            Self::TextList(items) => {
                if index >= items.len() {
                    return false;
                }
                items.remove(index);
            }
            Self::IntegerList(items) => {
                if index >= items.len() {
                    return false;
                }
                items.remove(index);
            }
            Self::StringNotes(notes) => {
                if index >= notes.len() {
                    return false;
                }
                notes.remove(index);
            }
            _ => return false,
        }
        true
    }
}

/// Rebuilds an instrument's `labels` grid from its sibling fields,
/// looked up by attribute key within the owning instance: one row per
/// `stringStartNotes` entry, one column per fret
/// (`stringRangeInCents / fretDistanceInCents`). All existing labels are
/// discarded. Only called on explicit user request; normal editing never
/// resyncs the grid.
pub fn regenerate_labels(instance: &mut Instance) -> Result<(), Error> {
    let string_count = match instance.field("stringStartNotes") {
        Some(FieldValue::StringNotes(notes)) => notes.len(),
        _ => {
            return Err(Error::GridConsistency(
                "this instance has no stringStartNotes attribute".to_string(),
            ));
        }
    };
    let range = integer_field(instance, "stringRangeInCents")?;
    let distance = integer_field(instance, "fretDistanceInCents")?;

    if distance == 0 || range % distance != 0 {
        return Err(Error::GridConsistency(
            "stringRangeInCents divided by fretDistanceInCents is not an integer".to_string(),
        ));
    }

    // A negative quotient yields rows with no columns.
    let fret_count = (range / distance).max(0) as usize;
    let grid = vec![vec![String::new(); fret_count]; string_count];

    match instance.field_mut("labels") {
        Some(field) if matches!(field, FieldValue::LabelGrid(_)) => {
            *field = FieldValue::LabelGrid(grid);
            Ok(())
        }
        _ => Err(Error::GridConsistency(
            "this instance has no labels attribute".to_string(),
        )),
    }
}

fn integer_field(instance: &Instance, attr_key: &str) -> Result<i64, Error> {
    let raw = match instance.field(attr_key) {
        Some(FieldValue::Integer(raw)) => raw,
        _ => {
            return Err(Error::GridConsistency(format!(
                "this instance has no {attr_key} attribute"
            )));
        }
    };
    parse_leading_int(raw)
        .ok_or_else(|| Error::GridConsistency(format!("{attr_key} is not a number")))
}
