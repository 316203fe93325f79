use super::constants::ConstantTable;
use crate::ast::Value;
use crate::CdclError;

/// Turn a raw value token into a typed value.
///
/// Digit-only tokens are integers, `@[NAME]` is a constant reference and
/// anything else is kept verbatim as text.
pub(super) fn evaluate_value(raw: &str, constants: &ConstantTable) -> Result<Value, CdclError> {
    let token = raw.trim();

    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return parse_integer(token);
    }

    if let Some(name) = constant_reference(token) {
        return constants.resolve(name).cloned();
    }

    Ok(Value::Text(token.to_string()))
}

fn parse_integer(token: &str) -> Result<Value, CdclError> {
    token.parse::<i64>().map(Value::Integer).map_err(|_| {
        CdclError::syntax(format!("Integer literal '{}' out of range", token), 0, "", 111)
            .with_hint(format!("Integers must fit in {} ..= {}", i64::MIN, i64::MAX))
    })
}

fn constant_reference(token: &str) -> Option<&str> {
    token.strip_prefix("@[")?.strip_suffix(']')
}
