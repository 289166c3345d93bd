
use serde_json::{Value, json};

/// 构造一个层条目：权重与激活张量都用`fill`填满
pub(super) fn layer_entry(
    name: &str,
    weight_shape: &[usize],
    activation_shape: &[usize],
    fill: f32,
) -> Value {
    json!([
        "cnn",
        name,
        weight_shape,
        filled(weight_shape, fill),
        activation_shape,
        filled(activation_shape, fill)
    ])
}

pub(super) fn filled(shape: &[usize], fill: f32) -> Value {
    match shape {
        [] => json!(fill),
        [len, inner @ ..] => Value::Array((0..*len).map(|_| filled(inner, fill)).collect()),
    }
}
