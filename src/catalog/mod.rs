//! 目录模块
//!
//! 把按epoch解码出的快照逐个并入逐层记录，再从输出层激活值中得出每个epoch的预测类别。
//!
//! # 主要组件
//!
//! - [`CatalogLoader`]: 一次完整的加载操作（发现 → 解码 → 累积 → 预测）
//! - [`CatalogSlot`]: 持有最近一次成功的加载结果，失败时不替换
//! - [`Catalog`] / [`LayerRecord`]: 逐层、逐epoch的权重与激活张量
//! - [`ClassNameTable`] / [`PredictionTable`]: 类别名表与每个epoch的预测
//!
//! # 使用示例
//!
//! ```ignore
//! use ckpt_catalog::catalog::CatalogLoader;
//! use ckpt_catalog::config::LoadOptions;
//!
//! let loaded = CatalogLoader::new(LoadOptions::default()).load_dir("exports/run_01")?;
//! for record in loaded.catalog.records() {
//!     println!("{} ({}): {} 个epoch", record.name(), record.layer_type(), record.epoch_count());
//! }
//! println!("epoch 0 预测: {:?}", loaded.predictions.get(0));
//! ```

mod accumulator;
mod loader;
mod prediction;
mod record;
mod tables;

#[cfg(test)]
mod tests;

pub use accumulator::Catalog;
pub use loader::{CatalogLoader, CatalogSlot, LoadedCatalog};
pub use prediction::{argmax, predict_all, predict_epoch};
pub use record::LayerRecord;
pub use tables::{ClassNameTable, PredictionTable};
