use thiserror::Error;
mod ops;
pub use self::ops::*;

/// 张量构造、物化（materialize）及索引时可能出现的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    #[error("张量形状为空：至少需要1个维度")]
    EmptyShape,
    #[error("形状的第{dimension}维须>0")]
    ZeroDimension { dimension: usize },
    #[error("形状{shape:?}的元素总数超出usize范围")]
    ShapeOverflow { shape: Vec<usize> },
    #[error("第{dimension}维长度不符：声明为{expected}，实际为{actual}")]
    LengthMismatch {
        dimension: usize,
        expected: usize,
        actual: usize,
    },
    #[error("第{dimension}维应为数组，实际为{found}")]
    ExpectedArray { dimension: usize, found: JsonKind },
    #[error("第{dimension}维应为数值，实际为{found}")]
    ExpectedNumber { dimension: usize, found: JsonKind },
    /// 有限数值超出`f32`可表示的范围
    #[error("第{dimension}维的数值{value}超出f32范围")]
    NumberOutOfRange { dimension: usize, value: String },
    #[error("数据长度{actual}与形状{shape:?}所需的{expected}不一致")]
    DataLengthMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },
    #[error("索引{index:?}超出形状{shape:?}的范围")]
    IndexOutOfRange {
        index: Vec<usize>,
        shape: Vec<usize>,
    },
}
