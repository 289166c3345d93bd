/*
 * @Description  : 张量物化（materialize）：由“形状 + 嵌套数组JSON”构造稠密张量，以及逆向的重新嵌套
 */

use serde_json::Value;

use super::Tensor;
use crate::errors::{JsonKind, TensorError};

impl Tensor {
    /// 由形状`shape`和嵌套深度恰为`shape.len()`的数组`nested`构造张量。
    ///
    /// 对每个线性下标`t ∈ [0, total)`，按`shape`做混合进制分解得到多维索引（最外层维度变化最慢），
    /// 用前`R-1`个分量逐层下探子数组，再用最后一个分量读取叶子数值，写入缓冲区的同一位置。
    /// 一阶张量不需要下探，直接从顶层数组读取。
    ///
    /// 每访问到第`d`层的数组都会校验其长度等于`shape[d]`；
    /// 该是数组处不是数组、该是数值处不是数值时均返回错误，绝不越界读取。
    /// 缓冲区随读到的叶子增长，不按声明的元素总数预分配。超出`f32`范围的数值视为错误。
    pub fn from_nested(shape: &[usize], nested: &Value) -> Result<Tensor, TensorError> {
        let total = Self::check_shape(shape)?;
        let rank = shape.len();
        let root = expect_array(nested, shape, 0)?;
        let mut buffer = Vec::new();
        let mut multi_index = vec![0; rank];

        for t in 0..total {
            unravel_index(t, shape, &mut multi_index);

            let mut current = root;
            for (dim, &i) in multi_index[..rank - 1].iter().enumerate() {
                current = expect_array(&current[i], shape, dim + 1)?;
            }
            buffer.push(expect_number(&current[multi_index[rank - 1]], rank - 1)?);
        }

        Self::from_vec(buffer, shape)
    }

    /// 按自身形状把数据重新嵌套成数组JSON，是`from_nested`的逆过程
    pub fn to_nested(&self) -> Value {
        fn nest(data: &[f32], shape: &[usize]) -> Value {
            match shape {
                [_] => Value::Array(data.iter().map(|&x| Value::from(f64::from(x))).collect()),
                [_, inner @ ..] => {
                    let stride = inner.iter().product::<usize>();
                    Value::Array(data.chunks(stride).map(|c| nest(c, inner)).collect())
                }
                [] => Value::Array(Vec::new()),
            }
        }
        nest(self.data_as_slice(), self.shape())
    }
}

/// 行主序下把线性下标`t`分解为多维索引，结果写入`multi_index`
fn unravel_index(mut t: usize, shape: &[usize], multi_index: &mut [usize]) {
    for (slot, &dim) in multi_index.iter_mut().zip(shape).rev() {
        *slot = t % dim;
        t /= dim;
    }
}

fn expect_array<'a>(
    value: &'a Value,
    shape: &[usize],
    dimension: usize,
) -> Result<&'a Vec<Value>, TensorError> {
    let array = value.as_array().ok_or(TensorError::ExpectedArray {
        dimension,
        found: JsonKind::of(value),
    })?;
    if array.len() != shape[dimension] {
        return Err(TensorError::LengthMismatch {
            dimension,
            expected: shape[dimension],
            actual: array.len(),
        });
    }
    Ok(array)
}

fn expect_number(value: &Value, dimension: usize) -> Result<f32, TensorError> {
    let wide = value.as_f64().ok_or(TensorError::ExpectedNumber {
        dimension,
        found: JsonKind::of(value),
    })?;
    // JSON中的数值总是有限的，窄化后为无穷即超出了f32范围
    let narrowed = wide as f32;
    if narrowed.is_infinite() {
        return Err(TensorError::NumberOutOfRange {
            dimension,
            value: value.to_string(),
        });
    }
    Ok(narrowed)
}
