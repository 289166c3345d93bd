//! 从输出层激活值中取出每个epoch的预测类别

use tracing::{debug, warn};

use super::accumulator::Catalog;
use super::tables::{ClassNameTable, PredictionTable};
use crate::config::{ArgmaxPolicy, LoadOptions};
use crate::snapshot::DecodeError;
use crate::tensor::Tensor;

/// 最大值所在下标，空切片返回None。
/// 两种策略都只在严格大于当前最大值时才更新，故并列时保留最早的下标。
/// 与NaN的比较恒为假：`FirstElement`下首元素为NaN时结果停在下标0
pub fn argmax(values: &[f32], policy: ArgmaxPolicy) -> Option<usize> {
    let (mut max_index, mut max_value) = match policy {
        ArgmaxPolicy::FirstElement => (0, *values.first()?),
        ArgmaxPolicy::ZeroBaseline => {
            if values.is_empty() {
                return None;
            }
            (0, 0.0)
        }
    };
    for (index, &value) in values.iter().enumerate() {
        if value > max_value {
            max_value = value;
            max_index = index;
        }
    }
    Some(max_index)
}

/// 由输出层某个epoch的激活值（形状须为`[1, n]`或`[n]`）得出预测类别名
pub fn predict_epoch(
    layer: &str,
    epoch: usize,
    activation: &Tensor,
    class_names: &ClassNameTable,
    policy: ArgmaxPolicy,
) -> Result<String, DecodeError> {
    let shape_error = || DecodeError::OutputShape {
        layer: layer.to_string(),
        epoch,
        shape: activation.shape().to_vec(),
    };
    match activation.shape() {
        [_] | [1, _] => {}
        _ => return Err(shape_error()),
    }
    let index = argmax(activation.data_as_slice(), policy).ok_or_else(shape_error)?;
    class_names
        .get(index)
        .map(str::to_string)
        .ok_or_else(|| DecodeError::ClassIndexOutOfRange {
            layer: layer.to_string(),
            epoch,
            index,
            len: class_names.len(),
        })
}

/// 为目录中的每个epoch计算预测。找不到输出层时返回空表
pub fn predict_all(
    catalog: &Catalog,
    class_names: &ClassNameTable,
    options: &LoadOptions,
) -> Result<PredictionTable, DecodeError> {
    let Some(output) = catalog.output_record(&options.output_marker) else {
        if !catalog.is_empty() {
            warn!(
                "没有层名含`{}`的输出层，跳过预测",
                options.output_marker
            );
        }
        return Ok(PredictionTable::new());
    };

    output
        .activation_tensors()
        .iter()
        .enumerate()
        .try_fold(PredictionTable::new(), |table, (epoch, activation)| {
            let label = predict_epoch(
                output.name(),
                epoch,
                activation,
                class_names,
                options.argmax,
            )?;
            debug!("epoch {epoch} 预测: {label}");
            Ok(table.with_prediction(epoch, label))
        })
}
