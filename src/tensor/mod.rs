use ndarray::{Array, IxDyn};

use crate::errors::TensorError;

mod index;
mod materialize;
mod print;
mod property;

#[cfg(test)]
mod tests;

/// 定义张量的结构体：一个形状（每维均为正整数）加上按行主序（最外层维度变化最慢）排布的`f32`稠密缓冲区。
/// 注：本库中的张量只承载快照里读出的权重与激活值，不提供任何运算。
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Array<f32, IxDyn>,
}

impl Tensor {
    /// 由行主序数据和形状创建一个张量。
    /// `shape`至少要有1个维度且每维须大于0；`data`的长度必须和`shape`中所有元素的乘积相等。
    pub fn new(data: &[f32], shape: &[usize]) -> Result<Tensor, TensorError> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// 同`new`，但直接接管`data`的所有权，避免大张量多拷贝一次
    pub fn from_vec(data: Vec<f32>, shape: &[usize]) -> Result<Tensor, TensorError> {
        let expected = Self::check_shape(shape)?;
        if data.len() != expected {
            return Err(TensorError::DataLengthMismatch {
                shape: shape.to_vec(),
                expected,
                actual: data.len(),
            });
        }
        let data = Array::from_shape_vec(IxDyn(shape), data).map_err(|_| {
            TensorError::DataLengthMismatch {
                shape: shape.to_vec(),
                expected,
                actual: expected,
            }
        })?;
        Ok(Tensor { data })
    }

    /// 校验形状并返回元素总数。形状来自外部文件，乘积溢出时返回错误而不是回绕
    pub(crate) fn check_shape(shape: &[usize]) -> Result<usize, TensorError> {
        if shape.is_empty() {
            return Err(TensorError::EmptyShape);
        }
        if let Some(dimension) = shape.iter().position(|&d| d == 0) {
            return Err(TensorError::ZeroDimension { dimension });
        }
        shape
            .iter()
            .try_fold(1usize, |total, &d| total.checked_mul(d))
            .filter(|&total| total <= isize::MAX as usize)
            .ok_or_else(|| TensorError::ShapeOverflow {
                shape: shape.to_vec(),
            })
    }
}
