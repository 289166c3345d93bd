use std::fmt::{self, Display};

use serde_json::Value;

/// JSON节点的种类，仅用于错误信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}
impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}
impl Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "布尔值",
            JsonKind::Number => "数值",
            JsonKind::String => "字符串",
            JsonKind::Array => "数组",
            JsonKind::Object => "对象",
        };
        write!(f, "{}", kind_name)
    }
}
