use indexmap::IndexMap;
use tracing::debug;

use crate::ast::{Table, Value};
use crate::CdclError;

/// Handle to a table node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableId(usize);

const ROOT: TableId = TableId(0);

/// Deepest block nesting a document may use. Opening one more block is a
/// syntax error.
pub const MAX_DEPTH: usize = 128;

#[derive(Debug)]
enum Slot {
    Scalar(Value),
    Child(TableId),
}

#[derive(Debug, Default)]
struct Node {
    entries: IndexMap<String, Slot>,
}

#[derive(Debug)]
struct Frame {
    table: TableId,
    /// Key under which a named block is linked to its parent.
    pending_key: Option<String>,
    /// Root-level anonymous blocks are merged into the root when closed.
    merge_into_root: bool,
}

/// Open tables as a stack of arena handles.
///
/// Named children are linked into their parent when opened, so writes made
/// through the child's handle are already visible from the parent.
#[derive(Debug)]
pub struct BlockStack {
    nodes: Vec<Node>,
    frames: Vec<Frame>,
}

impl Default for BlockStack {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockStack {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            frames: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    fn alloc(&mut self) -> TableId {
        self.nodes.push(Node::default());
        TableId(self.nodes.len() - 1)
    }

    fn current(&self) -> Option<TableId> {
        self.frames.last().map(|f| f.table)
    }

    fn check_depth(&self) -> Result<(), CdclError> {
        if self.depth() >= MAX_DEPTH {
            return Err(CdclError::syntax(
                format!("Blocks nested deeper than {} levels", MAX_DEPTH),
                0,
                "",
                122,
            )
            .with_hint("Flatten the configuration"));
        }
        Ok(())
    }

    pub fn open_anonymous(&mut self) -> Result<(), CdclError> {
        self.check_depth()?;
        let frame = match self.current() {
            // Nested: a grouping scope over the enclosing table.
            Some(table) => Frame { table, pending_key: None, merge_into_root: false },
            None => Frame { table: self.alloc(), pending_key: None, merge_into_root: true },
        };
        self.frames.push(frame);
        debug!(depth = self.depth(), "opened anonymous block");
        Ok(())
    }

    pub fn open_named(&mut self, key: &str) -> Result<(), CdclError> {
        self.check_depth()?;
        let parent = self.current().unwrap_or(ROOT);
        let child = self.alloc();
        self.nodes[parent.0].entries.insert(key.to_string(), Slot::Child(child));
        self.frames.push(Frame {
            table: child,
            pending_key: Some(key.to_string()),
            merge_into_root: false,
        });
        debug!(key, depth = self.depth(), "opened named block");
        Ok(())
    }

    /// Write `key` into the innermost open table. Returns `false` when no
    /// block is open and the entry had nowhere to go.
    pub fn insert(&mut self, key: &str, value: Value) -> bool {
        match self.current() {
            Some(table) => {
                self.nodes[table.0].entries.insert(key.to_string(), Slot::Scalar(value));
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) -> Result<(), CdclError> {
        let frame = self.frames.pop().ok_or_else(|| {
            CdclError::syntax("No block to close", 0, "", 120)
                .with_hint("Remove the stray `}` or open a block before it")
        })?;

        if frame.merge_into_root {
            let entries = std::mem::take(&mut self.nodes[frame.table.0].entries);
            self.nodes[ROOT.0].entries.extend(entries);
        }

        debug!(
            key = frame.pending_key.as_deref().unwrap_or("<anonymous>"),
            depth = self.depth(),
            "closed block"
        );
        Ok(())
    }

    /// Consume the builder, producing the root table.
    pub fn finish(mut self) -> Result<Table, CdclError> {
        if let Some(frame) = self.frames.last() {
            let message = match &frame.pending_key {
                Some(key) => format!("Unclosed block '{}'", key),
                None => "Unclosed anonymous block".to_string(),
            };
            return Err(CdclError::syntax(message, 0, "", 121)
                .with_hint(format!("Add {} closing `}}`", self.frames.len())));
        }
        Ok(self.materialize(ROOT))
    }

    fn materialize(&mut self, id: TableId) -> Table {
        let entries = std::mem::take(&mut self.nodes[id.0].entries);
        entries
            .into_iter()
            .map(|(key, slot)| {
                let value = match slot {
                    Slot::Scalar(v) => v,
                    Slot::Child(child) => Value::Table(self.materialize(child)),
                };
                (key, value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_child_visible_through_parent() {
        let mut blocks = BlockStack::new();
        blocks.open_named("outer").unwrap();
        blocks.open_named("inner").unwrap();
        assert!(blocks.insert("k", Value::Integer(1)));
        blocks.close().unwrap();
        blocks.close().unwrap();

        let root = blocks.finish().unwrap();
        let inner = root["outer"].as_table().unwrap()["inner"].as_table().unwrap();
        assert_eq!(inner["k"], Value::Integer(1));
    }

    #[test]
    fn test_root_anonymous_merges_last_write_wins() {
        let mut blocks = BlockStack::new();
        blocks.open_anonymous().unwrap();
        blocks.insert("a", Value::Integer(1));
        blocks.insert("b", Value::Integer(2));
        blocks.close().unwrap();
        blocks.open_anonymous().unwrap();
        blocks.insert("a", Value::Integer(3));
        blocks.close().unwrap();

        let root = blocks.finish().unwrap();
        assert_eq!(root.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(root["a"], Value::Integer(3));
    }

    #[test]
    fn test_nested_anonymous_writes_into_enclosing_table() {
        let mut blocks = BlockStack::new();
        blocks.open_named("server").unwrap();
        blocks.open_anonymous().unwrap();
        blocks.insert("port", Value::Integer(80));
        blocks.close().unwrap();
        blocks.open_anonymous().unwrap();
        blocks.close().unwrap();
        blocks.close().unwrap();

        let root = blocks.finish().unwrap();
        let server = root["server"].as_table().unwrap();
        assert_eq!(server.len(), 1);
        assert_eq!(server["port"], Value::Integer(80));
    }

    #[test]
    fn test_insert_without_open_block() {
        let mut blocks = BlockStack::new();
        assert!(!blocks.insert("lost", Value::Integer(1)));
        assert!(blocks.finish().unwrap().is_empty());
    }

    #[test]
    fn test_close_on_empty_stack() {
        let mut blocks = BlockStack::new();
        assert!(matches!(blocks.close(), Err(CdclError::SyntaxError { code: Some(120), .. })));
    }

    #[test]
    fn test_finish_with_open_block() {
        let mut blocks = BlockStack::new();
        blocks.open_named("test").unwrap();
        match blocks.finish() {
            Err(CdclError::SyntaxError { message, .. }) => assert!(message.contains("test")),
            other => panic!("expected unclosed block error, got {:?}", other),
        }
    }

    #[test]
    fn test_reopened_key_replaces_previous_value() {
        let mut blocks = BlockStack::new();
        blocks.open_named("a").unwrap();
        blocks.insert("x", Value::Text("scalar".into()));
        blocks.open_named("x").unwrap();
        blocks.insert("y", Value::Integer(1));
        blocks.close().unwrap();
        blocks.close().unwrap();

        let root = blocks.finish().unwrap();
        let a = root["a"].as_table().unwrap();
        assert_eq!(a["x"].as_table().unwrap()["y"], Value::Integer(1));
    }

    #[test]
    fn test_nesting_limit() {
        let mut blocks = BlockStack::new();
        for _ in 0..MAX_DEPTH {
            blocks.open_named("k").unwrap();
        }
        assert!(matches!(
            blocks.open_anonymous(),
            Err(CdclError::SyntaxError { code: Some(122), .. })
        ));
        assert!(matches!(
            blocks.open_named("k"),
            Err(CdclError::SyntaxError { code: Some(122), .. })
        ));
    }
}
