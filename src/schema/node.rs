use std::fmt;

use rust_decimal::Decimal;

/// Extra constraints attached to a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validation {
    pub required: bool,
}

/// Discriminator of the six node variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    Object,
    Array,
    Integer,
    Number,
    Boolean,
    String,
}

impl SchemaType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "OBJECT" => Some(SchemaType::Object),
            "ARRAY" => Some(SchemaType::Array),
            "INTEGER" => Some(SchemaType::Integer),
            "NUMBER" => Some(SchemaType::Number),
            "BOOLEAN" => Some(SchemaType::Boolean),
            "STRING" => Some(SchemaType::String),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SchemaType::Object => "OBJECT",
            SchemaType::Array => "ARRAY",
            SchemaType::Integer => "INTEGER",
            SchemaType::Number => "NUMBER",
            SchemaType::Boolean => "BOOLEAN",
            SchemaType::String => "STRING",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Variant-specific payload of a [`SchemaNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// Named properties in document order, keys unique
    Object {
        properties: Vec<(String, SchemaNode)>,
    },
    /// Single item schema shared by every element
    Array { items: Box<SchemaNode> },
    Integer { constant: Option<i64> },
    Number { constant: Option<Decimal> },
    Boolean { constant: Option<bool> },
    String { constant: Option<String> },
}

/// A node of the state schema tree.
///
/// Ids are assigned when the tree is wrapped in a
/// [`StateSchema`](crate::schema::StateSchema); a freshly built node has an
/// empty id.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub id: String,
    pub parent_id: Option<String>,
    pub is_root: bool,
    pub validation: Option<Validation>,
    pub kind: SchemaKind,
}

impl SchemaNode {
    pub fn new(kind: SchemaKind) -> Self {
        SchemaNode {
            id: String::new(),
            parent_id: None,
            is_root: false,
            validation: None,
            kind,
        }
    }

    /// Object node keeping the given order; a repeated key replaces the
    /// earlier node in place.
    pub fn object<K, I>(properties: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SchemaNode)>,
    {
        let mut entries: Vec<(String, SchemaNode)> = Vec::new();
        for (key, node) in properties {
            let key = key.into();
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = node,
                None => entries.push((key, node)),
            }
        }
        SchemaNode::new(SchemaKind::Object {
            properties: entries,
        })
    }

    pub fn array(items: SchemaNode) -> Self {
        SchemaNode::new(SchemaKind::Array {
            items: Box::new(items),
        })
    }

    pub fn integer() -> Self {
        SchemaNode::new(SchemaKind::Integer { constant: None })
    }

    pub fn number() -> Self {
        SchemaNode::new(SchemaKind::Number { constant: None })
    }

    pub fn boolean() -> Self {
        SchemaNode::new(SchemaKind::Boolean { constant: None })
    }

    pub fn string() -> Self {
        SchemaNode::new(SchemaKind::String { constant: None })
    }

    /// Boolean node declaring `const: value`.
    pub fn boolean_const(value: bool) -> Self {
        SchemaNode::new(SchemaKind::Boolean {
            constant: Some(value),
        })
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn required(self) -> Self {
        self.with_validation(Validation { required: true })
    }

    pub fn schema_type(&self) -> SchemaType {
        match self.kind {
            SchemaKind::Object { .. } => SchemaType::Object,
            SchemaKind::Array { .. } => SchemaType::Array,
            SchemaKind::Integer { .. } => SchemaType::Integer,
            SchemaKind::Number { .. } => SchemaType::Number,
            SchemaKind::Boolean { .. } => SchemaType::Boolean,
            SchemaKind::String { .. } => SchemaType::String,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, SchemaKind::Object { .. })
    }

    pub fn is_required(&self) -> bool {
        self.validation.is_some_and(|v| v.required)
    }

    /// Whether a scalar node pins a constant value.
    pub fn has_constant(&self) -> bool {
        match &self.kind {
            SchemaKind::Object { .. } | SchemaKind::Array { .. } => false,
            SchemaKind::Integer { constant } => constant.is_some(),
            SchemaKind::Number { constant } => constant.is_some(),
            SchemaKind::Boolean { constant } => constant.is_some(),
            SchemaKind::String { constant } => constant.is_some(),
        }
    }

    /// Child by property name; arrays and scalars have none.
    pub fn property(&self, key: &str) -> Option<&SchemaNode> {
        match &self.kind {
            SchemaKind::Object { properties } => properties
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, child)| child),
            _ => None,
        }
    }

    /// Writes `id` here and derives the ids of everything below.
    ///
    /// Object children get `id/key`; array items share the array's id.
    pub(crate) fn assign_id(&mut self, id: String) {
        match &mut self.kind {
            SchemaKind::Object { properties } => {
                for (key, child) in properties.iter_mut() {
                    child.parent_id = Some(id.clone());
                    child.assign_id(format!("{id}/{key}"));
                }
            }
            SchemaKind::Array { items } => {
                items.parent_id = Some(id.clone());
                items.assign_id(id.clone());
            }
            _ => {}
        }
        self.id = id;
    }

    /// Depth-first search by id; a node is checked before its children.
    pub fn find_by_id(&self, id: &str) -> Option<&SchemaNode> {
        if self.id == id {
            return Some(self);
        }

        match &self.kind {
            SchemaKind::Object { properties } => {
                properties.iter().find_map(|(_, child)| child.find_by_id(id))
            }
            SchemaKind::Array { items } => items.find_by_id(id),
            _ => None,
        }
    }

    /// Appends this node's id, then its descendants', depth-first.
    pub(crate) fn collect_ids(&self, ids: &mut Vec<String>) {
        ids.push(self.id.clone());
        match &self.kind {
            SchemaKind::Object { properties } => {
                for (_, child) in properties {
                    child.collect_ids(ids);
                }
            }
            SchemaKind::Array { items } => items.collect_ids(ids),
            _ => {}
        }
    }
}
