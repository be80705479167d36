pub mod editor;
pub mod error;
pub mod form;
pub mod render;
pub mod schema;

pub use editor::{Editor, View};
pub use error::Error;
pub use form::mutate::regenerate_labels;
pub use form::{Direction, Document, Field, FieldValue, Instance, StringNote};
pub use schema::{AttributeSchema, ClassSchema, SchemaRegistry, ValueType};
