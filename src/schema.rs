//! # State Schema
//!
//! A typed tree describing the shape of an external state object. The tree is
//! built once, given ids, and then only read: the parser asks it which type
//! sits at each `$.` path in an expression.
//!
//! ## Ids
//!
//! The root is `root`. An object property `key` under a node `p` gets the id
//! `p/key`. Array items share the id of their array, so arrays add no path
//! segment.
//!
//! ```text
//! {"definition": {"type": "OBJECT", "properties": {
//!     "age":  {"type": "NUMBER"},
//!     "user": {"type": "OBJECT", "properties": {"name": {"type": "STRING"}}}
//! }}}
//! ```
//!
//! yields `root`, `root/age`, `root/user`, `root/user/name`.
//!
//! ## Path validity
//!
//! `$.user.name` becomes the id `root/user/name`. Every proper prefix of that
//! id (`root`, `root/user`) must name an OBJECT node, and the full id must
//! name some node.
pub mod loader;
pub mod node;
pub mod path;

pub use loader::SchemaError;
pub use node::{SchemaKind, SchemaNode, SchemaType, Validation};
pub use path::{PathError, StatePath, ancestor_ids, transform_to_id};

pub const ROOT_ID: &str = "root";

/// A schema tree whose ids have been assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSchema {
    definition: SchemaNode,
}

impl StateSchema {
    /// Marks `definition` as the root and assigns ids to the whole tree.
    pub fn new(mut definition: SchemaNode) -> Self {
        definition.is_root = true;
        definition.parent_id = None;
        definition.assign_id(ROOT_ID.to_string());
        StateSchema { definition }
    }

    pub fn definition(&self) -> &SchemaNode {
        &self.definition
    }

    /// Node with exactly this id, searched depth-first from the root.
    pub fn find_by_id(&self, id: &str) -> Option<&SchemaNode> {
        self.definition.find_by_id(id)
    }

    /// Every proper prefix of the path's id is an OBJECT node and the full
    /// id names some node.
    pub fn is_valid_path(&self, path: &StatePath) -> bool {
        let ids = ancestor_ids(&path.to_schema_id());
        let Some((last, parents)) = ids.split_last() else {
            return false;
        };

        parents
            .iter()
            .all(|id| self.find_by_id(id).is_some_and(SchemaNode::is_object))
            && self.find_by_id(last).is_some()
    }

    /// Node at `path`, or `None` when the path is not valid.
    pub fn resolve(&self, path: &StatePath) -> Option<&SchemaNode> {
        if !self.is_valid_path(path) {
            return None;
        }
        self.find_by_id(&path.to_schema_id())
    }

    /// All ids, depth-first, parents before children.
    pub fn flattened_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        self.definition.collect_ids(&mut ids);
        ids
    }
}
