mod classes;

/// The recognized attribute value shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Text,
    Integer,
    TextList,
    IntegerList,
    StringNoteList,
    LabelGrid,
}

impl ValueType {
    /// The `data-type` marker used in rendered markup and understood by
    /// the extraction logic. The names match the original data files'
    /// editor format.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::TextList => "textList",
            Self::IntegerList => "integerList",
            Self::StringNoteList => "stringNotes",
            Self::LabelGrid => "instrumentLabels",
        }
    }

    pub fn is_list(self) -> bool {
        matches!(self, Self::TextList | Self::IntegerList | Self::StringNoteList)
    }
}

/// A named, typed field of a class's schema.
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub key: &'static str,
    pub description: &'static str,
    pub value_type: ValueType,
}

/// A named category of domain entities (e.g. "instruments"), backed by
/// one schema and one JSON data file.
#[derive(Debug, Clone)]
pub struct ClassSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub attributes: Vec<AttributeSchema>,
}

impl ClassSchema {
    pub fn attribute(&self, key: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|attr| attr.key == key)
    }
}

/// Immutable registry of every editable class, built once at startup and
/// injected wherever schema information is needed.
#[derive(Debug)]
pub struct SchemaRegistry {
    classes: Vec<ClassSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self {
            classes: classes::all(),
        }
    }

    /// Looks up a class by name, i.e. by data file name minus extension.
    pub fn lookup(&self, class_name: &str) -> Option<&ClassSchema> {
        self.classes.iter().find(|class| class.name == class_name)
    }

    pub fn class_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.iter().map(|class| class.name)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{SchemaRegistry, ValueType};

    #[test]
    fn registry_contains_every_class() {
        let registry = SchemaRegistry::new();
        let names = registry.class_names().collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "clefs",
                "genres",
                "instruments",
                "intervals",
                "midi_instruments",
                "modes",
                "note_lengths",
                "notes",
                "scales",
            ]
        );
    }

    #[test]
    fn lookup_unknown_class_is_none() {
        let registry = SchemaRegistry::new();
        assert!(registry.lookup("unknown").is_none());
        assert!(registry.lookup("notes.json").is_none());
    }

    #[test]
    fn instruments_schema_has_expected_attribute_types() {
        let registry = SchemaRegistry::new();
        let instruments = registry.lookup("instruments").expect("class");
        let types = instruments
            .attributes
            .iter()
            .map(|attr| (attr.key, attr.value_type))
            .collect::<Vec<_>>();
        assert_eq!(
            types,
            vec![
                ("stringStartNotes", ValueType::StringNoteList),
                ("stringRangeInCents", ValueType::Integer),
                ("fretDistanceInCents", ValueType::Integer),
                ("labels", ValueType::LabelGrid),
            ]
        );
    }

    #[test]
    fn notes_schema_matches_data_file_shape() {
        let registry = SchemaRegistry::new();
        let notes = registry.lookup("notes").expect("class");
        assert_eq!(notes.attributes[0].key, "centsToC");
        assert_eq!(notes.attributes[0].value_type, ValueType::Integer);
        assert!(notes.attributes[1..]
            .iter()
            .all(|attr| attr.value_type == ValueType::Text));
    }
}
