// Author: Dustin Pilgrim
// License: MIT

use crate::ast::Table;
use crate::{CdclError, Value};

fn type_error(expected: &str, value: &Value, code: u32) -> CdclError {
    CdclError::TypeError {
        message: format!("Expected {}, got {:?}", expected, value),
        hint: Some(format!("Use {} value in your config", expected)),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = CdclError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(type_error("a text", &value, 401)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = CdclError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            _ => Err(type_error("an integer", &value, 402)),
        }
    }
}

impl TryFrom<Value> for Table {
    type Error = CdclError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Table(t) => Ok(t),
            _ => Err(type_error("a table", &value, 403)),
        }
    }
}

// Narrower integers go through i64 and fail when the value doesn't fit.
macro_rules! impl_try_from_integer {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = CdclError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = i64::try_from(value)?;
                    <$ty>::try_from(n).map_err(|_| CdclError::TypeError {
                        message: format!("{} does not fit in {}", n, stringify!($ty)),
                        hint: Some(format!(
                            "Use a value between {} and {}",
                            <$ty>::MIN,
                            <$ty>::MAX
                        )),
                        code: Some(404),
                    })
                }
            }
        )*
    };
}

impl_try_from_integer!(i32, u16, u32, u64, usize);
