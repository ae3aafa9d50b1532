//! Built-in component palette: what the editor offers, with default props
//! and the shape of each editable property.

use crate::component::{Component, ComponentKind, PropValue, Props};
use crate::id_generator::generate_component_id;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    String,
    Number,
    Boolean,
    Select,
    Color,
    Textarea,
    Object,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: PropValue,
}

/// One editable property of a component type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropKind,
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    pub required: bool,
}

impl PropSpec {
    fn new(name: &str, kind: PropKind, label: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            label: label.to_string(),
            options: Vec::new(),
            required: false,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn options<V: Into<PropValue>>(mut self, options: impl IntoIterator<Item = (&'static str, V)>) -> Self {
        self.options = options
            .into_iter()
            .map(|(label, value)| SelectOption {
                label: label.to_string(),
                value: value.into(),
            })
            .collect();
        self
    }
}

/// Palette entry for one component type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub name: String,
    pub icon: String,
    pub category: String,
    pub description: String,
    pub default_props: Props,
    pub prop_types: Vec<PropSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryCategory {
    pub category: String,
    pub components: Vec<ComponentMeta>,
}

const SIZES: [(&str, &str); 3] = [("Small", "small"), ("Middle", "middle"), ("Large", "large")];

fn props<const N: usize>(entries: [(&str, PropValue); N]) -> Props {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn meta(
    kind: ComponentKind,
    name: &str,
    icon: &str,
    category: &str,
    description: &str,
    default_props: Props,
    prop_types: Vec<PropSpec>,
) -> ComponentMeta {
    ComponentMeta {
        kind,
        name: name.to_string(),
        icon: icon.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        default_props,
        prop_types,
    }
}

impl ComponentKind {
    /// Palette metadata. `None` for custom tags.
    pub fn meta(&self) -> Option<ComponentMeta> {
        use PropKind::*;

        let meta = match self {
            ComponentKind::Button => meta(
                self.clone(),
                "Button",
                "🔘",
                "Basic",
                "Clickable button",
                props([
                    ("text", "Button".into()),
                    ("type", "default".into()),
                    ("size", "middle".into()),
                    ("disabled", false.into()),
                ]),
                vec![
                    PropSpec::new("text", String, "Button text").required(),
                    PropSpec::new("type", Select, "Button type").options([
                        ("Default", "default"),
                        ("Primary", "primary"),
                        ("Dashed", "dashed"),
                        ("Text", "text"),
                        ("Link", "link"),
                    ]),
                    PropSpec::new("size", Select, "Button size").options(SIZES),
                    PropSpec::new("disabled", Boolean, "Disabled"),
                ],
            ),
            ComponentKind::Input => meta(
                self.clone(),
                "Input",
                "📝",
                "Basic",
                "Single-line text input",
                props([
                    ("placeholder", "Please enter".into()),
                    ("size", "middle".into()),
                    ("disabled", false.into()),
                ]),
                vec![
                    PropSpec::new("placeholder", String, "Placeholder"),
                    PropSpec::new("size", Select, "Input size").options(SIZES),
                    PropSpec::new("disabled", Boolean, "Disabled"),
                ],
            ),
            ComponentKind::Text => meta(
                self.clone(),
                "Text",
                "📄",
                "Basic",
                "Inline text",
                props([("content", "Text content".into()), ("fontSize", 14.into())]),
                vec![
                    PropSpec::new("content", String, "Content").required(),
                    PropSpec::new("color", Color, "Text color"),
                    PropSpec::new("fontSize", Number, "Font size"),
                ],
            ),
            ComponentKind::Title => meta(
                self.clone(),
                "Title",
                "📋",
                "Basic",
                "Heading text",
                props([("content", "Title".into()), ("level", 1.into())]),
                vec![
                    PropSpec::new("content", String, "Content").required(),
                    PropSpec::new("level", Select, "Level").options([
                        ("H1", 1),
                        ("H2", 2),
                        ("H3", 3),
                        ("H4", 4),
                        ("H5", 5),
                    ]),
                    PropSpec::new("color", Color, "Text color"),
                ],
            ),
            ComponentKind::Paragraph => meta(
                self.clone(),
                "Paragraph",
                "📃",
                "Basic",
                "Block of text",
                props([("content", "Paragraph content".into())]),
                vec![
                    PropSpec::new("content", Textarea, "Content").required(),
                    PropSpec::new("color", Color, "Text color"),
                ],
            ),
            ComponentKind::Container => meta(
                self.clone(),
                "Container",
                "📦",
                "Layout",
                "General purpose container",
                props([("padding", 16.into()), ("margin", 0.into())]),
                vec![
                    PropSpec::new("backgroundColor", Color, "Background color"),
                    PropSpec::new("padding", Number, "Padding"),
                    PropSpec::new("margin", Number, "Margin"),
                ],
            ),
            ComponentKind::Card => meta(
                self.clone(),
                "Card",
                "🃏",
                "Layout",
                "Card with header and body",
                props([
                    ("title", "Card title".into()),
                    ("content", "Card content".into()),
                    ("bordered", true.into()),
                ]),
                vec![
                    PropSpec::new("title", String, "Title"),
                    PropSpec::new("content", Textarea, "Content"),
                    PropSpec::new("bordered", Boolean, "Bordered"),
                ],
            ),
            ComponentKind::Space => meta(
                self.clone(),
                "Space",
                "↔️",
                "Layout",
                "Spacing between children",
                props([("size", "middle".into()), ("direction", "horizontal".into())]),
                vec![
                    PropSpec::new("size", Select, "Gap").options(SIZES),
                    PropSpec::new("direction", Select, "Direction")
                        .options([("Horizontal", "horizontal"), ("Vertical", "vertical")]),
                ],
            ),
            ComponentKind::Image => meta(
                self.clone(),
                "Image",
                "🖼️",
                "Media",
                "Image",
                props([
                    ("src", "https://via.placeholder.com/200x150".into()),
                    ("alt", "Image".into()),
                    ("width", 200.into()),
                    ("height", 150.into()),
                ]),
                vec![
                    PropSpec::new("src", String, "Source").required(),
                    PropSpec::new("alt", String, "Alt text"),
                    PropSpec::new("width", Number, "Width"),
                    PropSpec::new("height", Number, "Height"),
                ],
            ),
            ComponentKind::Textarea => meta(
                self.clone(),
                "Textarea",
                "📝",
                "Form",
                "Multi-line text input",
                props([
                    ("placeholder", "Please enter".into()),
                    ("rows", 4.into()),
                    ("disabled", false.into()),
                ]),
                vec![
                    PropSpec::new("placeholder", String, "Placeholder"),
                    PropSpec::new("rows", Number, "Rows"),
                    PropSpec::new("disabled", Boolean, "Disabled"),
                ],
            ),
            ComponentKind::Select => meta(
                self.clone(),
                "Select",
                "📋",
                "Form",
                "Dropdown select",
                props([("placeholder", "Please select".into()), ("disabled", false.into())]),
                vec![
                    PropSpec::new("placeholder", String, "Placeholder"),
                    PropSpec::new("disabled", Boolean, "Disabled"),
                ],
            ),
            ComponentKind::Switch => meta(
                self.clone(),
                "Switch",
                "🔘",
                "Form",
                "On/off toggle",
                props([("checked", false.into()), ("disabled", false.into())]),
                vec![
                    PropSpec::new("checked", Boolean, "Checked"),
                    PropSpec::new("disabled", Boolean, "Disabled"),
                ],
            ),
            ComponentKind::Divider => meta(
                self.clone(),
                "Divider",
                "➖",
                "Data display",
                "Separates content",
                props([("type", "horizontal".into()), ("orientation", "center".into())]),
                vec![
                    PropSpec::new("type", Select, "Divider type")
                        .options([("Horizontal", "horizontal"), ("Vertical", "vertical")]),
                    PropSpec::new("orientation", Select, "Text position").options([
                        ("Left", "left"),
                        ("Center", "center"),
                        ("Right", "right"),
                    ]),
                ],
            ),
            ComponentKind::Badge => meta(
                self.clone(),
                "Badge",
                "🏷️",
                "Data display",
                "Count badge",
                props([("count", 5.into()), ("showZero", false.into())]),
                vec![
                    PropSpec::new("count", Number, "Count"),
                    PropSpec::new("showZero", Boolean, "Show zero"),
                ],
            ),
            ComponentKind::Custom(_) => return None,
        };

        Some(meta)
    }
}

/// Palette grouped by category, in display order
pub fn component_library() -> Vec<LibraryCategory> {
    let mut categories: Vec<LibraryCategory> = Vec::new();

    for meta in ComponentKind::BUILT_IN.iter().filter_map(ComponentKind::meta) {
        match categories.iter_mut().find(|c| c.category == meta.category) {
            Some(category) => category.components.push(meta),
            None => categories.push(LibraryCategory {
                category: meta.category.clone(),
                components: vec![meta],
            }),
        }
    }

    categories
}

impl Component {
    /// Fresh node of `kind` with a generated id and the palette defaults.
    /// Custom kinds get no props and are named after their tag.
    pub fn from_library(kind: &ComponentKind) -> Self {
        let id = generate_component_id(kind.as_str());
        match kind.meta() {
            Some(meta) => Component {
                props: meta.default_props,
                ..Component::new(id, kind.clone(), meta.name)
            },
            None => Component::new(id, kind.clone(), kind.as_str()),
        }
    }
}
