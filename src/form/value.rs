use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::schema::ValueType;

/// One string of an instrument: a note name and the octave it starts in.
/// The octave is kept as the raw edited string until extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringNote {
    pub note: String,
    pub octave: String,
}

impl StringNote {
    pub fn blank() -> Self {
        Self {
            note: String::new(),
            octave: "0".to_string(),
        }
    }
}

/// Editable state of one attribute, one arm per [`ValueType`]. Numeric
/// arms hold the raw text a user would have typed so that intermediate
/// edit states survive a render round trip; parsing happens only at
/// extraction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(String),
    TextList(Vec<String>),
    IntegerList(Vec<String>),
    StringNotes(Vec<StringNote>),
    LabelGrid(Vec<Vec<String>>),
}

impl FieldValue {
    /// The type's zero value: empty string, 0, or empty sequence.
    pub fn default_for(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Text => Self::Text(String::new()),
            ValueType::Integer => Self::Integer("0".to_string()),
            ValueType::TextList => Self::TextList(Vec::new()),
            ValueType::IntegerList => Self::IntegerList(Vec::new()),
            ValueType::StringNoteList => Self::StringNotes(Vec::new()),
            ValueType::LabelGrid => Self::LabelGrid(Vec::new()),
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Text(_) => ValueType::Text,
            Self::Integer(_) => ValueType::Integer,
            Self::TextList(_) => ValueType::TextList,
            Self::IntegerList(_) => ValueType::IntegerList,
            Self::StringNotes(_) => ValueType::StringNoteList,
            Self::LabelGrid(_) => ValueType::LabelGrid,
        }
    }

    /// Seeds edit state from a loaded JSON value. Shapes that do not
    /// match the declared type degrade to the type's default rather than
    /// failing the whole load.
    pub fn from_json(value_type: ValueType, value: &JsonValue) -> Self {
        match value_type {
            ValueType::Text => Self::Text(scalar_text(value)),
            ValueType::Integer => Self::Integer(scalar_number(value)),
            ValueType::TextList => Self::TextList(
                value
                    .as_array()
                    .map(|items| items.iter().map(scalar_text).collect())
                    .unwrap_or_default(),
            ),
            ValueType::IntegerList => Self::IntegerList(
                value
                    .as_array()
                    .map(|items| items.iter().map(scalar_number).collect())
                    .unwrap_or_default(),
            ),
            ValueType::StringNoteList => Self::StringNotes(
                value
                    .as_array()
                    .map(|pairs| pairs.iter().map(string_note).collect())
                    .unwrap_or_default(),
            ),
            ValueType::LabelGrid => Self::LabelGrid(
                value
                    .as_array()
                    .map(|rows| {
                        rows.iter()
                            .map(|row| {
                                row.as_array()
                                    .map(|cells| cells.iter().map(scalar_text).collect())
                                    .unwrap_or_default()
                            })
                            .collect()
                    })
                    .unwrap_or_default(),
            ),
        }
    }

    /// The inverse of rendering: maps the edit state back into the typed
    /// JSON shape. Numeric fields that hold no parseable integer extract
    /// as `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Text(value) => JsonValue::String(value.clone()),
            Self::Integer(raw) => integer_json(raw),
            Self::TextList(items) => JsonValue::Array(
                items
                    .iter()
                    .map(|item| JsonValue::String(item.clone()))
                    .collect(),
            ),
            Self::IntegerList(items) => {
                JsonValue::Array(items.iter().map(|raw| integer_json(raw)).collect())
            }
            Self::StringNotes(notes) => JsonValue::Array(
                notes
                    .iter()
                    .map(|entry| {
                        JsonValue::Array(vec![
                            JsonValue::String(entry.note.clone()),
                            integer_json(&entry.octave),
                        ])
                    })
                    .collect(),
            ),
            Self::LabelGrid(rows) => JsonValue::Array(
                rows.iter()
                    .map(|row| {
                        JsonValue::Array(
                            row.iter()
                                .map(|cell| JsonValue::String(cell.clone()))
                                .collect(),
                        )
                    })
                    .collect(),
            ),
        }
    }
}

/// An ordered attribute-key to JSON-value mapping, as written per
/// instance into the save output.
pub type JsonObject = IndexMap<String, JsonValue>;

/// Parses a leading integer out of edited text: optional surrounding
/// whitespace before an optional sign and a digit run, trailing garbage
/// ignored. `None` when no digits are present at all.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value = 0i64;
    for byte in digits[..end].bytes() {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }
    Some(if negative { -value } else { value })
}

fn integer_json(raw: &str) -> JsonValue {
    match parse_leading_int(raw) {
        Some(value) => JsonValue::from(value),
        None => JsonValue::Null,
    }
}

fn scalar_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(text) => text.clone(),
        JsonValue::Number(number) => number.to_string(),
        _ => String::new(),
    }
}

fn scalar_number(value: &JsonValue) -> String {
    match value {
        JsonValue::Number(number) => number.to_string(),
        JsonValue::String(text) => text.clone(),
        _ => "0".to_string(),
    }
}

fn string_note(value: &JsonValue) -> StringNote {
    let Some(pair) = value.as_array() else {
        return StringNote::blank();
    };
    StringNote {
        note: pair.first().map(scalar_text).unwrap_or_default(),
        octave: pair.get(1).map(scalar_number).unwrap_or_else(|| "0".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldValue, StringNote, parse_leading_int};
    use crate::schema::ValueType;
    use serde_json::json;

    #[test]
    fn parse_leading_int_matches_loose_numeric_input() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  -7"), Some(-7));
        assert_eq!(parse_leading_int("+3"), Some(3));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("0.5"), Some(0));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn every_value_type_round_trips_through_edit_state() {
        let cases = vec![
            (ValueType::Text, json!("C#")),
            (ValueType::Text, json!("")),
            (ValueType::Integer, json!(0)),
            (ValueType::Integer, json!(-1100)),
            (ValueType::TextList, json!(["minor second", "tritonus"])),
            (ValueType::TextList, json!([])),
            (ValueType::IntegerList, json!([0, 200, -100])),
            (ValueType::IntegerList, json!([])),
            (ValueType::StringNoteList, json!([["E", 2], ["A", -1]])),
            (ValueType::StringNoteList, json!([])),
            (ValueType::LabelGrid, json!([["1", ""], ["", "2"]])),
            (ValueType::LabelGrid, json!([])),
        ];

        for (value_type, original) in cases {
            let extracted = FieldValue::from_json(value_type, &original).to_json();
            assert_eq!(extracted, original, "round trip for {value_type:?}");
        }
    }

    #[test]
    fn non_numeric_integer_edit_extracts_null() {
        let value = FieldValue::Integer("twelve".to_string());
        assert_eq!(value.to_json(), serde_json::Value::Null);

        let list = FieldValue::IntegerList(vec!["3".to_string(), String::new()]);
        assert_eq!(list.to_json(), json!([3, null]));
    }

    #[test]
    fn mismatched_json_shape_degrades_to_default() {
        let value = FieldValue::from_json(ValueType::TextList, &json!("not a list"));
        assert_eq!(value, FieldValue::TextList(Vec::new()));

        let value = FieldValue::from_json(ValueType::StringNoteList, &json!([42]));
        assert_eq!(value, FieldValue::StringNotes(vec![StringNote::blank()]));
    }

    #[test]
    fn string_note_octave_keeps_raw_text_until_extraction() {
        let value = FieldValue::from_json(ValueType::StringNoteList, &json!([["B", "3"]]));
        let FieldValue::StringNotes(notes) = &value else {
            panic!("expected string notes");
        };
        assert_eq!(notes[0].octave, "3");
        assert_eq!(value.to_json(), json!([["B", 3]]));
    }
}
