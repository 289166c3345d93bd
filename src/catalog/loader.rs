/*
 * @Description  : 加载操作：发现 → 逐文件解码 → 累积 → 预测
 *
 * 整个过程同步、单线程，任一文件出错都会中止本次加载并返回错误，不会暴露半成品目录。
 * 结果（目录、类别名表、预测表）全部装在返回值里，由调用方持有，没有任何全局状态。
 */

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::accumulator::Catalog;
use super::prediction::predict_all;
use super::tables::{ClassNameTable, PredictionTable};
use crate::config::LoadOptions;
use crate::snapshot::{DecodeError, decode_file, discover_epoch_files};

/// 一次加载的完整结果，整体交给可视化层
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub class_names: ClassNameTable,
    pub predictions: PredictionTable,
    /// 已处理的文件，下标即epoch序号
    pub sources: Vec<PathBuf>,
}

impl LoadedCatalog {
    pub fn epoch_count(&self) -> usize {
        self.catalog.epoch_count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    options: LoadOptions,
}

impl CatalogLoader {
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// 加载目录下的全部快照文件。目录不存在或为空时得到空目录
    pub fn load_dir<P: AsRef<Path>>(&self, dir: P) -> Result<LoadedCatalog, DecodeError> {
        self.options.validate()?;
        let files = discover_epoch_files(dir, &self.options)?;
        self.load_files(&files)
    }

    /// 按给定顺序加载文件，第`i`个文件即epoch `i`。
    /// 调用方须自行保证顺序确定（例如用[`order_epoch_files`](crate::snapshot::order_epoch_files)排序）
    pub fn load_files<P: AsRef<Path>>(&self, files: &[P]) -> Result<LoadedCatalog, DecodeError> {
        self.options.validate()?;

        let mut catalog = Catalog::new();
        let mut class_names = ClassNameTable::default();
        let mut sources = Vec::with_capacity(files.len());
        for (epoch, path) in files.iter().enumerate() {
            let snapshot = decode_file(path)?;
            debug!("epoch {epoch}: {}", snapshot.path.display());
            class_names = class_names.merge(
                &snapshot.path,
                epoch,
                snapshot.class_names,
                self.options.class_names,
            )?;
            catalog = catalog.absorb(&snapshot.path, snapshot.layers)?;
            sources.push(snapshot.path);
        }

        let predictions = predict_all(&catalog, &class_names, &self.options)?;
        info!(
            "加载完成: {} 层, {} 个epoch, {} 个类别",
            catalog.len(),
            catalog.epoch_count(),
            class_names.len()
        );
        Ok(LoadedCatalog {
            catalog,
            class_names,
            predictions,
            sources,
        })
    }
}

/// 持有最近一次成功加载的结果。重新加载失败时保留原结果不变
#[derive(Debug, Default)]
pub struct CatalogSlot {
    current: Option<LoadedCatalog>,
}

impl CatalogSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&LoadedCatalog> {
        self.current.as_ref()
    }

    /// 执行`load`，成功才替换当前结果
    pub fn reload_with<F>(&mut self, load: F) -> Result<&LoadedCatalog, DecodeError>
    where
        F: FnOnce() -> Result<LoadedCatalog, DecodeError>,
    {
        let loaded = load()?;
        Ok(&*self.current.insert(loaded))
    }

    pub fn reload<P: AsRef<Path>>(
        &mut self,
        loader: &CatalogLoader,
        dir: P,
    ) -> Result<&LoadedCatalog, DecodeError> {
        self.reload_with(|| loader.load_dir(dir))
    }

    /// 交出当前结果
    pub fn take(&mut self) -> Option<LoadedCatalog> {
        self.current.take()
    }
}
