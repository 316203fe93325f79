use std::collections::HashMap;

use tracing::debug;

use crate::ast::Value;
use crate::CdclError;

/// Constants defined with `def`, in textual order.
#[derive(Debug, Default)]
pub struct ConstantTable {
    values: HashMap<String, Value>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: &str, value: Value) {
        if self.values.insert(name.to_string(), value).is_some() {
            debug!(constant = name, "constant redefined");
        } else {
            debug!(constant = name, "constant defined");
        }
    }

    /// Line position is left empty; the orchestrator fills it in.
    pub fn resolve(&self, name: &str) -> Result<&Value, CdclError> {
        self.values.get(name).ok_or_else(|| CdclError::UndefinedConstant {
            name: name.to_string(),
            line: 0,
            text: String::new(),
            hint: Some(format!("Define it above its first use: `def {} := ...`", name)),
            code: Some(110),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_resolve() {
        let mut constants = ConstantTable::new();
        assert!(constants.is_empty());

        constants.define("PORT", Value::Integer(8080));
        constants.define("HOST", Value::Text("localhost".into()));
        assert_eq!(constants.len(), 2);
        assert!(constants.contains("PORT"));
        assert!(!constants.contains("port"));

        assert_eq!(constants.resolve("PORT").unwrap().as_integer(), Some(8080));
        assert_eq!(constants.resolve("HOST").unwrap().as_text(), Some("localhost"));
    }

    #[test]
    fn test_redefinition_keeps_one_entry() {
        let mut constants = ConstantTable::new();
        constants.define("X", Value::Integer(1));
        constants.define("X", Value::Text("two".into()));
        assert_eq!(constants.len(), 1);
        assert_eq!(constants.resolve("X").unwrap().as_text(), Some("two"));
        assert_eq!(constants.resolve("X").unwrap().as_integer(), None);
    }

    #[test]
    fn test_resolve_missing() {
        match ConstantTable::new().resolve("NOPE") {
            Err(CdclError::UndefinedConstant { name, code, .. }) => {
                assert_eq!(name, "NOPE");
                assert_eq!(code, Some(110));
            }
            other => panic!("expected undefined constant, got {:?}", other),
        }
    }
}
