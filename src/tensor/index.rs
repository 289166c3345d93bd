use std::ops::Index;

use super::Tensor;
use crate::errors::TensorError;

impl Tensor {
    /// 按多维索引取单个元素，索引的维数须与张量阶数一致
    pub fn get(&self, index: &[usize]) -> Result<f32, TensorError> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| TensorError::IndexOutOfRange {
                index: index.to_vec(),
                shape: self.shape().to_vec(),
            })
    }

    /// 行主序下多维索引对应的线性下标（与`data_as_slice()`对应）
    pub fn linear_index(&self, index: &[usize]) -> Result<usize, TensorError> {
        let shape = self.shape();
        if index.len() != shape.len() || index.iter().zip(shape).any(|(&i, &d)| i >= d) {
            return Err(TensorError::IndexOutOfRange {
                index: index.to_vec(),
                shape: shape.to_vec(),
            });
        }
        Ok(index
            .iter()
            .zip(shape)
            .fold(0, |acc, (&i, &d)| acc * d + i))
    }
}

impl<const N: usize> Index<[usize; N]> for Tensor {
    type Output = f32;

    /// 越界时panic，与切片索引一致；需要错误处理时请用`get`
    fn index(&self, index: [usize; N]) -> &f32 {
        &self.data[&index[..]]
    }
}
