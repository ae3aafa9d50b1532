//! Component nodes and their property bags.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Insertion-ordered property bag. Order only matters for generated output.
pub type Props = IndexMap<String, PropValue>;

/// Presentation overrides attached to a node.
pub type Style = IndexMap<String, PropValue>;

/// One element of a page's component tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Opaque identifier, unique across the page's whole tree
    pub id: String,

    /// Component type tag
    #[serde(rename = "type")]
    pub kind: ComponentKind,

    /// Display name shown in the editor
    pub name: String,

    #[serde(default)]
    pub props: Props,

    /// Child nodes. `None` and an empty list are kept distinct.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Arc<Component>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl Component {
    pub fn new(id: impl Into<String>, kind: impl Into<ComponentKind>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: name.into(),
            props: Props::new(),
            children: None,
            style: None,
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Component>) -> Self {
        self.children = Some(children.into_iter().map(Arc::new).collect());
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.style
            .get_or_insert_with(Style::new)
            .insert(key.into(), value.into());
        self
    }

    /// Children as a slice, empty when the node has none
    pub fn children(&self) -> &[Arc<Component>] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// String-valued prop, if present and a string
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(PropValue::as_str)
    }

    /// Props that become markup attributes, in insertion order. Content
    /// props and the ones a template consumes itself are left out.
    pub fn attribute_props(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        let consumed = self.kind.template_props();
        self.props
            .iter()
            .map(|(key, value)| (key.as_str(), value))
            .filter(move |(key, _)| !CONTENT_PROPS.contains(key) && !consumed.contains(key))
    }
}

/// Props rendered as element content rather than as attributes
pub const CONTENT_PROPS: [&str; 3] = ["text", "content", "title"];

/// Find the first node with `id` in pre-order
pub fn find_component<'a>(nodes: &'a [Arc<Component>], id: &str) -> Option<&'a Arc<Component>> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_component(node.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Built-in component types, plus an escape hatch for tags the editor
/// does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    Button,
    Input,
    Text,
    Title,
    Paragraph,
    Container,
    Card,
    Space,
    Image,
    Textarea,
    Select,
    Switch,
    Divider,
    Badge,
    Custom(String),
}

impl ComponentKind {
    pub const BUILT_IN: [ComponentKind; 14] = [
        ComponentKind::Button,
        ComponentKind::Input,
        ComponentKind::Text,
        ComponentKind::Title,
        ComponentKind::Paragraph,
        ComponentKind::Container,
        ComponentKind::Card,
        ComponentKind::Space,
        ComponentKind::Image,
        ComponentKind::Textarea,
        ComponentKind::Select,
        ComponentKind::Switch,
        ComponentKind::Divider,
        ComponentKind::Badge,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Input => "input",
            ComponentKind::Text => "text",
            ComponentKind::Title => "title",
            ComponentKind::Paragraph => "paragraph",
            ComponentKind::Container => "container",
            ComponentKind::Card => "card",
            ComponentKind::Space => "space",
            ComponentKind::Image => "image",
            ComponentKind::Textarea => "textarea",
            ComponentKind::Select => "select",
            ComponentKind::Switch => "switch",
            ComponentKind::Divider => "divider",
            ComponentKind::Badge => "badge",
            ComponentKind::Custom(tag) => tag,
        }
    }

    /// Whether nodes of this kind accept children on the canvas
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ComponentKind::Container | ComponentKind::Card | ComponentKind::Space
        )
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ComponentKind::Custom(_))
    }

    /// Props the markup template for this kind renders itself
    pub fn template_props(&self) -> &'static [&'static str] {
        match self {
            ComponentKind::Title => &["level"],
            ComponentKind::Image => &["alt"],
            ComponentKind::Badge => &["count"],
            _ => &[],
        }
    }
}

impl From<&str> for ComponentKind {
    fn from(tag: &str) -> Self {
        match tag {
            "button" => ComponentKind::Button,
            "input" => ComponentKind::Input,
            "text" => ComponentKind::Text,
            "title" => ComponentKind::Title,
            "paragraph" => ComponentKind::Paragraph,
            "container" => ComponentKind::Container,
            "card" => ComponentKind::Card,
            "space" => ComponentKind::Space,
            "image" => ComponentKind::Image,
            "textarea" => ComponentKind::Textarea,
            "select" => ComponentKind::Select,
            "switch" => ComponentKind::Switch,
            "divider" => ComponentKind::Divider,
            "badge" => ComponentKind::Badge,
            other => ComponentKind::Custom(other.to_string()),
        }
    }
}

impl From<String> for ComponentKind {
    fn from(tag: String) -> Self {
        match ComponentKind::from(tag.as_str()) {
            ComponentKind::Custom(_) => ComponentKind::Custom(tag),
            known => known,
        }
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Custom(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON-compatible property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<PropValue>),
    Object(IndexMap<String, PropValue>),
}

impl PropValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            PropValue::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }
}

/// Renders the value as a JSON literal.
impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Null => f.write_str("null"),
            PropValue::Bool(b) => write!(f, "{}", b),
            PropValue::Number(n) => write!(f, "{}", n),
            PropValue::String(s) => write_json_string(f, s),
            PropValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            PropValue::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_json_string(f, key)?;
                    write!(f, ":{}", value)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_json_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Number(value.into())
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(i64::from(value).into())
    }
}

impl From<u64> for PropValue {
    fn from(value: u64) -> Self {
        PropValue::Number(value.into())
    }
}

/// Non-finite floats have no JSON form and become `Null`.
impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(PropValue::Number)
            .unwrap_or(PropValue::Null)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(items: Vec<PropValue>) -> Self {
        PropValue::Array(items)
    }
}

impl From<IndexMap<String, PropValue>> for PropValue {
    fn from(entries: IndexMap<String, PropValue>) -> Self {
        PropValue::Object(entries)
    }
}
