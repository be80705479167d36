use crate::form::{Document, Instance};
use crate::render::{escape, widget};
use crate::schema::{AttributeSchema, ClassSchema};

/// The explanation block plus the tagged widget for one attribute.
pub fn attribute_block(attr: &AttributeSchema, instance: &Instance) -> String {
    let mut source = String::new();
    source.push_str("<div class='attribute'>");
    source.push_str(&format!(
        "<div class='attribute-name'>{}</div>",
        escape(attr.key)
    ));
    source.push_str(attr.description);
    source.push_str("</div>");

    source.push_str(&format!(
        "<div data-type='{}' data-variable='{}'>",
        attr.value_type.tag(),
        escape(attr.key)
    ));
    if let Some(value) = instance.field(attr.key) {
        source.push_str(&widget(value));
    }
    source.push_str("</div>");
    source
}

/// One class instance as a markup block: the editable key, the
/// instance-level affordances, then every attribute in schema order.
pub fn instance_block(schema: &ClassSchema, instance: &Instance) -> String {
    let mut source = String::new();
    source.push_str(&format!(
        "<div class='instance' data-instance='{}'>",
        escape(schema.name)
    ));
    source.push_str("<h2>Instance: </h2>");
    source.push_str(&format!(
        "<input type='text' size='50' value='{}'/>",
        escape(&instance.key)
    ));
    source.push_str("<button data-action='instance-delete'>Delete instance</button>");
    source.push_str("<button data-action='instance-copy-above'>Add copy above</button>");
    source.push_str("<button data-action='instance-copy-below'>Add copy below</button>");
    source.push_str("<button data-action='instance-add-new'>Add new instance above</button>");

    for attr in &schema.attributes {
        source.push_str(&attribute_block(attr, instance));
    }
    source.push_str("</div>");
    source
}

/// The edit view: file heading, class description, every instance block
/// in document order, the trailing add-new affordance and the save link.
pub fn edit_page(schema: &ClassSchema, document: &Document) -> String {
    let file_name = format!("{}.json", document.class_name);
    let mut source = String::new();
    source.push_str("<a href='#' data-action='view-selection'>Back to file selection</a><br/>");
    source.push_str(&format!("<h1>{}</h1>", escape(&file_name)));
    source.push_str(&format!(
        "<div class='class-description'>{}</div>",
        schema.description
    ));

    for instance in &document.instances {
        source.push_str(&instance_block(schema, instance));
    }

    source.push_str(&format!(
        "<div class='instance-append' data-instance='{}'>\
         <button data-action='instance-add-new'>Add new instance</button><br/></div>",
        escape(schema.name)
    ));
    source.push_str(&format!(
        "<p class='save'><a href='#' data-action='file-save'>Save edited {}</a><br/></p>",
        escape(&file_name)
    ));
    source
}

/// The initial file-selection view.
pub fn selection_page() -> String {
    "<h1>Choose a data file to edit (usually located in the 'data' subfolder):</h1>\
     <input type='file' data-action='file-select'/>"
        .to_string()
}
