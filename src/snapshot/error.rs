//! 快照解码错误类型定义

use std::fmt::{self, Display};
use std::path::PathBuf;
use thiserror::Error;

use crate::errors::TensorError;

/// 张量在层条目中的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorRole {
    Weight,
    Activation,
}
impl Display for TensorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role_name = match self {
            TensorRole::Weight => "权重",
            TensorRole::Activation => "激活值",
        };
        write!(f, "{}", role_name)
    }
}

/// 某个epoch文件与首个文件所确定的目录布局之间的差异
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inconsistency {
    LayerCount {
        expected: usize,
        actual: usize,
    },
    LayerName {
        position: usize,
        expected: String,
        actual: String,
    },
    Shape {
        layer: String,
        role: TensorRole,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}
impl Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inconsistency::LayerCount { expected, actual } => {
                write!(f, "层数应为{expected}，实际为{actual}")
            }
            Inconsistency::LayerName {
                position,
                expected,
                actual,
            } => write!(f, "第{position}层应为`{expected}`，实际为`{actual}`"),
            Inconsistency::Shape {
                layer,
                role,
                expected,
                actual,
            } => write!(
                f,
                "`{layer}`的{role}形状应为{expected:?}，实际为{actual:?}"
            ),
        }
    }
}

/// 快照发现、解码、累积与预测过程中的错误。
/// 除配置错误外，每个变体都尽量指明出错的文件、层位置与维度。
#[derive(Debug, Error)]
pub enum DecodeError {
    /// IO 错误
    #[error("读取文件失败 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 不是合法的 JSON 文档
    #[error("JSON 语法错误 {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 文档结构不符合“若干层条目 + 类别名列表”的约定，`position`为顶层数组中的下标
    #[error("快照结构错误 {path} 第{position}个元素: {reason}")]
    Schema {
        path: PathBuf,
        position: usize,
        reason: String,
    },

    /// 嵌套数组与声明的形状不符，或叶子不是数值
    #[error("张量形状不符 {path} 第{position}层`{layer}`的{role}: {source}")]
    ShapeMismatch {
        path: PathBuf,
        position: usize,
        layer: String,
        role: TensorRole,
        #[source]
        source: TensorError,
    },

    /// 层数、层序或形状与首个文件不同
    #[error("跨epoch不一致 {path}（epoch {epoch}）: {detail}")]
    CrossEpochInconsistency {
        path: PathBuf,
        epoch: usize,
        detail: Inconsistency,
    },

    /// 无法为文件确定唯一的epoch序号
    #[error("epoch排序有歧义 {path}: {reason}")]
    AmbiguousOrder { path: PathBuf, reason: String },

    /// 类别名列表与首个文件不同（仅`ClassNamePolicy::Validate`下）
    #[error("类别名列表与首个文件不一致 {path}: 期望 {expected:?}, 实际 {actual:?}")]
    ClassNamesMismatch {
        path: PathBuf,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// 输出层激活值不是`[1, n]`或`[n]`
    #[error("输出层`{layer}`在epoch {epoch}的激活值形状{shape:?}无法用于预测")]
    OutputShape {
        layer: String,
        epoch: usize,
        shape: Vec<usize>,
    },

    /// 预测出的下标超出类别名表
    #[error("输出层`{layer}`在epoch {epoch}的预测下标{index}超出类别表长度{len}")]
    ClassIndexOutOfRange {
        layer: String,
        epoch: usize,
        index: usize,
        len: usize,
    },

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),
}
