/*
 * @Description  : 单个epoch快照文档的解码
 *
 * 顶层数组中除最后一个元素外，每个元素都是6个字段的层条目；最后一个元素是类别名列表。
 * 层条目先按结构反序列化为具名记录（字段数必须恰为6），再分别物化权重与激活张量。
 */

use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::{DecodeError, TensorRole};
use crate::errors::JsonKind;
use crate::tensor::Tensor;

/// 层条目的原始结构，按位置对应`[类名, 层名, 权重形状, 权重张量, 激活形状, 激活张量]`
#[derive(Debug, Deserialize)]
struct LayerEntry {
    class_label: String,
    layer_name: String,
    weight_shape: Vec<usize>,
    weight_tensor: Value,
    activation_shape: Vec<usize>,
    activation_tensor: Value,
}

/// 解码后的单层数据（单个epoch）
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLayer {
    /// 导出时附带的类名，仅用于展示
    pub class_label: String,
    pub name: String,
    pub weight: Tensor,
    pub activation: Tensor,
}

/// 单个epoch快照文件的解码结果
#[derive(Debug, Clone, PartialEq)]
pub struct EpochSnapshot {
    pub path: PathBuf,
    pub layers: Vec<DecodedLayer>,
    pub class_names: Vec<String>,
}

/// 读取并解码单个快照文件。文件会被完整读入内存后再解析
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<EpochSnapshot, DecodeError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&json).map_err(|source| DecodeError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    decode_document(path, document)
}

/// 解码已解析好的 JSON 文档，`path`只用于错误信息与溯源
pub fn decode_document(path: &Path, document: Value) -> Result<EpochSnapshot, DecodeError> {
    let schema_error = |position: usize, reason: String| DecodeError::Schema {
        path: path.to_path_buf(),
        position,
        reason,
    };

    let mut elements = match document {
        Value::Array(elements) => elements,
        other => {
            return Err(schema_error(
                0,
                format!("顶层应为数组，实际为{}", JsonKind::of(&other)),
            ));
        }
    };
    let Some(class_list) = elements.pop() else {
        return Err(schema_error(0, "顶层数组为空，缺少类别名列表".to_string()));
    };
    let class_names: Vec<String> = serde_json::from_value(class_list)
        .map_err(|e| schema_error(elements.len(), format!("类别名列表无效: {e}")))?;

    let layers = elements
        .into_iter()
        .enumerate()
        .map(|(position, element)| decode_layer(path, position, element))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "解码 {}: {} 层, {} 个类别",
        path.display(),
        layers.len(),
        class_names.len()
    );
    Ok(EpochSnapshot {
        path: path.to_path_buf(),
        layers,
        class_names,
    })
}

fn decode_layer(path: &Path, position: usize, element: Value) -> Result<DecodedLayer, DecodeError> {
    if !element.is_array() {
        return Err(DecodeError::Schema {
            path: path.to_path_buf(),
            position,
            reason: format!("层条目应为数组，实际为{}", JsonKind::of(&element)),
        });
    }
    let entry: LayerEntry = serde_json::from_value(element).map_err(|e| DecodeError::Schema {
        path: path.to_path_buf(),
        position,
        reason: format!("层条目无效: {e}"),
    })?;

    let materialize = |shape: &[usize], nested: &Value, role: TensorRole| {
        Tensor::from_nested(shape, nested).map_err(|source| DecodeError::ShapeMismatch {
            path: path.to_path_buf(),
            position,
            layer: entry.layer_name.clone(),
            role,
            source,
        })
    };
    let weight = materialize(&entry.weight_shape, &entry.weight_tensor, TensorRole::Weight)?;
    let activation = materialize(
        &entry.activation_shape,
        &entry.activation_tensor,
        TensorRole::Activation,
    )?;

    Ok(DecodedLayer {
        class_label: entry.class_label,
        name: entry.layer_name,
        weight,
        activation,
    })
}
