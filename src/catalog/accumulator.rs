/*
 * @Description  : 跨epoch累积逐层记录
 *
 * 首个epoch决定目录的层数与层序；之后每个epoch都必须逐位置对齐（层数、层名、形状均一致），
 * 对齐后把新张量追加到同位置的记录上。每一步都由“当前目录 + 新epoch”构造出下一个目录。
 */

use std::path::Path;
use tracing::debug;

use super::record::LayerRecord;
use crate::layer::LayerType;
use crate::snapshot::{DecodeError, DecodedLayer, Inconsistency, TensorRole};

/// 一次加载得到的所有层记录
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    records: Vec<LayerRecord>,
    epoch_count: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 把下一个epoch（序号为当前的`epoch_count()`）的解码结果并入目录，返回新的目录。
    /// 与已有布局不一致时返回`CrossEpochInconsistency`，不会产生错位的记录
    pub fn absorb(self, path: &Path, layers: Vec<DecodedLayer>) -> Result<Self, DecodeError> {
        let epoch = self.epoch_count;
        if epoch == 0 {
            debug!("epoch 0 ({}) 确定目录布局: {} 层", path.display(), layers.len());
            return Ok(Self {
                records: layers.into_iter().map(LayerRecord::first_epoch).collect(),
                epoch_count: 1,
            });
        }

        self.check_alignment(&layers)
            .map_err(|detail| DecodeError::CrossEpochInconsistency {
                path: path.to_path_buf(),
                epoch,
                detail,
            })?;

        debug!("epoch {epoch} ({}) 并入目录", path.display());
        let records = self
            .records
            .into_iter()
            .zip(layers)
            .map(|(record, layer)| record.with_epoch(layer.weight, layer.activation))
            .collect();
        Ok(Self {
            records,
            epoch_count: epoch + 1,
        })
    }

    fn check_alignment(&self, layers: &[DecodedLayer]) -> Result<(), Inconsistency> {
        if layers.len() != self.records.len() {
            return Err(Inconsistency::LayerCount {
                expected: self.records.len(),
                actual: layers.len(),
            });
        }
        for (position, (record, layer)) in self.records.iter().zip(layers).enumerate() {
            if layer.name != record.name() {
                return Err(Inconsistency::LayerName {
                    position,
                    expected: record.name().to_string(),
                    actual: layer.name.clone(),
                });
            }
            let shapes = [
                (TensorRole::Weight, record.weight_shape(), layer.weight.shape()),
                (
                    TensorRole::Activation,
                    record.activation_shape(),
                    layer.activation.shape(),
                ),
            ];
            for (role, expected, actual) in shapes {
                if expected != actual {
                    return Err(Inconsistency::Shape {
                        layer: layer.name.clone(),
                        role,
                        expected: expected.to_vec(),
                        actual: actual.to_vec(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn records(&self) -> &[LayerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 已处理的epoch数
    pub fn epoch_count(&self) -> usize {
        self.epoch_count
    }

    /// 按层名查找（取第一个同名层）
    pub fn record(&self, name: &str) -> Option<&LayerRecord> {
        self.records.iter().find(|r| r.name() == name)
    }

    pub fn records_of_type(&self, layer_type: LayerType) -> impl Iterator<Item = &LayerRecord> {
        self.records
            .iter()
            .filter(move |r| r.layer_type() == layer_type)
    }

    /// 输出层：层名含`marker`的最后一个记录
    pub fn output_record(&self, marker: &str) -> Option<&LayerRecord> {
        self.records.iter().rev().find(|r| r.is_output(marker))
    }
}
