//! 快照模块
//!
//! 负责找到一次训练导出的所有epoch快照文件，并把每个文件解码成按层排列的张量。
//!
//! # 主要组件
//!
//! - [`discover_epoch_files`]: 列出目录下的快照文件并按显式排序键排序
//! - [`decode_file`] / [`decode_document`]: 把单个epoch的 JSON 文档解码为 [`EpochSnapshot`]
//! - [`DecodeError`]: 本 crate 的统一错误类型
//!
//! # 文件格式
//!
//! ```text
//! [
//!   [类名, 层名, 权重形状, 权重张量(嵌套数组), 激活形状, 激活张量(嵌套数组)],
//!   ...每层一条...,
//!   [类别名1, 类别名2, ...]
//! ]
//! ```

mod decoder;
mod discovery;
pub mod error;

#[cfg(test)]
mod tests;

pub use decoder::{DecodedLayer, EpochSnapshot, decode_document, decode_file};
pub use discovery::{discover_epoch_files, epoch_number, order_epoch_files};
pub use error::{DecodeError, Inconsistency, TensorRole};
