//! # Ckpt Catalog
//!
//! `ckpt_catalog`把一次训练按epoch导出的网络快照（JSON）解码为逐层的权重/激活张量目录，
//! 并从输出层激活值中得出每个epoch的预测类别，供外部的可视化层使用。
//!
//! 主要入口是[`CatalogLoader`]；加载结果[`LoadedCatalog`]整体交给调用方持有。
//!

pub mod catalog;
pub mod config;
pub mod errors;
pub mod layer;
pub mod snapshot;
pub mod tensor;
pub mod utils;

pub use catalog::{Catalog, CatalogLoader, CatalogSlot, LayerRecord, LoadedCatalog};
pub use config::LoadOptions;
pub use layer::LayerType;
pub use snapshot::DecodeError;
pub use tensor::Tensor;
