//! Pure projections from edit state to HTML markup fragments. Every
//! attribute control carries `data-type` and `data-variable` markers and
//! every affordance a `data-action` marker, so a host page can wire
//! events back to the model operations without positional lookups.

mod page;

pub use page::{attribute_block, edit_page, instance_block, selection_page};

use crate::form::{FieldValue, StringNote};

/// Renders the editable control(s) for one field value.
pub fn widget(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text_widget(text),
        FieldValue::Integer(raw) => integer_widget(raw),
        FieldValue::TextList(items) => text_list_widget(items),
        FieldValue::IntegerList(items) => integer_list_widget(items),
        FieldValue::StringNotes(notes) => string_notes_widget(notes),
        FieldValue::LabelGrid(rows) => label_grid_widget(rows),
    }
}

fn text_widget(value: &str) -> String {
    format!("<input size='50' type='text' value='{}'/><br/>", escape(value))
}

fn integer_widget(raw: &str) -> String {
    format!("<input type='number' value='{}'/><br/>", escape(raw))
}

fn text_list_widget(items: &[String]) -> String {
    let mut source = String::new();
    for item in items {
        source.push_str("<div>");
        source.push_str(&format!(
            "<textarea rows='1' cols='25'>{}</textarea>",
            escape(item)
        ));
        source.push_str(element_buttons());
        source.push_str("<br/></div>");
    }
    source.push_str(append_row());
    source
}

fn integer_list_widget(items: &[String]) -> String {
    let mut source = String::new();
    for item in items {
        source.push_str("<div>");
        source.push_str(&format!("<input type='number' value='{}'/>", escape(item)));
        source.push_str(element_buttons());
        source.push_str("<br/></div>");
    }
    source.push_str(append_row());
    source
}

fn string_notes_widget(notes: &[StringNote]) -> String {
    let mut source = String::new();
    for entry in notes {
        source.push_str("<div>");
        source.push_str(&format!(
            "<input type='text' value='{}'/>",
            escape(&entry.note)
        ));
        source.push_str(&format!(
            "<input type='number' value='{}'/>",
            escape(&entry.octave)
        ));
        source.push_str(element_buttons());
        source.push_str("</div>");
    }
    source.push_str(append_row());
    source
}

fn label_grid_widget(rows: &[Vec<String>]) -> String {
    let mut source = String::new();
    for row in rows {
        source.push_str("<div>");
        for cell in row {
            source.push_str(&format!(
                "<input type='text' size='3' value='{}'/>",
                escape(cell)
            ));
        }
        source.push_str("</div>");
    }
    source.push_str(
        "<button data-action='labels-regenerate'>Readjust label number to changed \
         string number and/or properties (deletes all current labels)</button><br/>",
    );
    source
}

fn element_buttons() -> &'static str {
    "<button data-action='element-delete'>Delete element</button>\
     <button data-action='element-insert-above'>Add new element above</button>"
}

fn append_row() -> &'static str {
    "<div><button data-action='element-append'>Add new element</button><br/></div>"
}

/// Escapes text for use in markup bodies and single-quoted attributes.
pub(crate) fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
