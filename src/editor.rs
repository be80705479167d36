use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::Error;
use crate::form::Document;
use crate::render;
use crate::schema::{ClassSchema, SchemaRegistry};

/// The two top-level views of the editor.
#[derive(Debug)]
pub enum View {
    SelectingFile,
    Editing(Document),
}

/// Orchestrates loading a data file, editing its in-memory document and
/// extracting it back to JSON text. Starts in file selection; `load`
/// moves to editing, `back` discards all unsaved edits.
pub struct Editor {
    registry: SchemaRegistry,
    view: View,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_registry(SchemaRegistry::new())
    }

    pub fn with_registry(registry: SchemaRegistry) -> Self {
        Self {
            registry,
            view: View::SelectingFile,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Parses `content` as a JSON object of instances and binds it to the
    /// class named by `file_name` minus its `.json` extension. On any
    /// failure the current view is left unchanged.
    pub fn load(&mut self, file_name: &str, content: &str) -> Result<(), Error> {
        let entries: IndexMap<String, JsonValue> = serde_json::from_str(content)?;

        let class_name = file_name.strip_suffix(".json").unwrap_or(file_name);
        let Some(schema) = self.registry.lookup(class_name) else {
            return Err(Error::UnsupportedFile(file_name.to_string()));
        };

        self.view = View::Editing(Document::from_entries(schema, &entries));
        Ok(())
    }

    /// Extracts the edited document into indented JSON text for the user
    /// to copy or save. Non-destructive and repeatable; the editor stays
    /// in the edit view.
    pub fn save(&self) -> Result<String, Error> {
        let View::Editing(document) = &self.view else {
            return Err(Error::NotEditing);
        };

        let out = document.to_json();
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        out.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Returns to file selection, discarding the edit state.
    pub fn back(&mut self) {
        self.view = View::SelectingFile;
    }

    /// Projects the current view to markup.
    pub fn render(&self) -> String {
        match &self.view {
            View::SelectingFile => render::selection_page(),
            View::Editing(document) => match self.registry.lookup(&document.class_name) {
                Some(schema) => render::edit_page(schema, document),
                None => render::selection_page(),
            },
        }
    }

    /// The schema of the document being edited, if any.
    pub fn schema(&self) -> Option<&ClassSchema> {
        match &self.view {
            View::Editing(document) => self.registry.lookup(&document.class_name),
            View::SelectingFile => None,
        }
    }

    pub fn document(&self) -> Option<&Document> {
        match &self.view {
            View::Editing(document) => Some(document),
            View::SelectingFile => None,
        }
    }

    pub fn document_mut(&mut self) -> Option<&mut Document> {
        match &mut self.view {
            View::Editing(document) => Some(document),
            View::SelectingFile => None,
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Editor, View};
    use crate::error::Error;
    use crate::form::FieldValue;
    use serde_json::json;

    const NOTES: &str = r#"{
        "C": {"centsToC": 0, "musicXMLStep": "C", "musicXMLAlter": "0.0", "musicXMLAccidental": ""},
        "B": {"centsToC": 1100, "musicXMLStep": "B", "musicXMLAlter": "0.0", "musicXMLAccidental": ""}
    }"#;

    #[test]
    fn load_populates_one_instance_per_key_in_order() {
        let mut editor = Editor::new();
        editor.load("notes.json", NOTES).expect("load");

        let document = editor.document().expect("editing");
        let keys = document
            .instances
            .iter()
            .map(|instance| instance.key.as_str())
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["C", "B"]);
    }

    #[test]
    fn load_rejects_invalid_json_and_stays_in_selection() {
        let mut editor = Editor::new();
        let err = editor.load("notes.json", "{not json").expect_err("parse error");
        assert!(matches!(err, Error::MalformedInput(_)));
        assert!(matches!(editor.view(), View::SelectingFile));
    }

    #[test]
    fn load_rejects_unknown_file_name() {
        let mut editor = Editor::new();
        let err = editor.load("unknown.json", "{}").expect_err("unknown class");
        assert!(matches!(err, Error::UnsupportedFile(_)));
        assert!(matches!(editor.view(), View::SelectingFile));
    }

    #[test]
    fn failed_load_keeps_current_document() {
        let mut editor = Editor::new();
        editor.load("notes.json", NOTES).expect("load");
        editor
            .load("notes.json", "broken")
            .expect_err("parse error");
        assert!(editor.document().is_some());
    }

    #[test]
    fn save_round_trips_loaded_file() {
        let mut editor = Editor::new();
        editor.load("notes.json", NOTES).expect("load");

        let saved = editor.save().expect("save");
        assert!(saved.contains("\t"));
        let reparsed: serde_json::Value = serde_json::from_str(&saved).expect("valid json");
        let original: serde_json::Value = serde_json::from_str(NOTES).expect("valid json");
        assert_eq!(reparsed, original);
    }

    #[test]
    fn save_is_idempotent_without_edits() {
        let mut editor = Editor::new();
        editor.load("notes.json", NOTES).expect("load");
        let first = editor.save().expect("save");
        let second = editor.save().expect("save again");
        assert_eq!(first, second);
        assert!(matches!(editor.view(), View::Editing(_)));
    }

    #[test]
    fn save_outside_edit_view_is_an_error() {
        let editor = Editor::new();
        assert!(matches!(editor.save(), Err(Error::NotEditing)));
    }

    #[test]
    fn worked_example_renders_and_round_trips() {
        let content = r#"{"C": {"centsToC": 0, "musicXMLStep": "C", "musicXMLAlter": "0.0", "musicXMLAccidental": ""}}"#;
        let mut editor = Editor::new();
        editor.load("notes.json", content).expect("load");

        let instance = &editor.document().expect("editing").instances[0];
        assert_eq!(instance.key, "C");
        assert_eq!(
            instance.field("centsToC"),
            Some(&FieldValue::Integer("0".to_string()))
        );
        assert_eq!(
            instance.field("musicXMLStep"),
            Some(&FieldValue::Text("C".to_string()))
        );
        assert_eq!(
            instance.field("musicXMLAlter"),
            Some(&FieldValue::Text("0.0".to_string()))
        );
        assert_eq!(
            instance.field("musicXMLAccidental"),
            Some(&FieldValue::Text(String::new()))
        );

        let markup = editor.render();
        assert!(markup.contains("<input type='number' value='0'/>"));
        assert!(markup.contains("value='0.0'"));

        let saved = editor.save().expect("save");
        let reparsed: serde_json::Value = serde_json::from_str(&saved).expect("valid json");
        assert_eq!(
            reparsed,
            json!({"C": {"centsToC": 0, "musicXMLStep": "C", "musicXMLAlter": "0.0", "musicXMLAccidental": ""}})
        );
    }

    #[test]
    fn back_discards_edits_and_returns_to_selection() {
        let mut editor = Editor::new();
        editor.load("notes.json", NOTES).expect("load");
        editor.document_mut().expect("editing").instances[0].key = "edited".to_string();

        editor.back();
        assert!(matches!(editor.view(), View::SelectingFile));
        assert!(editor.document().is_none());
        assert!(editor.render().contains("data-action='file-select'"));
    }

    #[test]
    fn edits_through_document_mut_show_up_in_save() {
        let mut editor = Editor::new();
        editor.load("notes.json", NOTES).expect("load");

        let document = editor.document_mut().expect("editing");
        if let Some(FieldValue::Integer(raw)) = document.instances[1].field_mut("centsToC") {
            *raw = "1000".to_string();
        }

        let saved = editor.save().expect("save");
        let reparsed: serde_json::Value = serde_json::from_str(&saved).expect("valid json");
        assert_eq!(reparsed["B"]["centsToC"], json!(1000));
    }
}
