use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

use crate::config::ClassNamePolicy;
use crate::snapshot::DecodeError;

/// 类别名表，所有层共用
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassNameTable {
    names: Vec<String>,
}

impl ClassNameTable {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 合并第`epoch`个文件的类别名列表，返回新的表。具体行为见[`ClassNamePolicy`]
    pub fn merge(
        self,
        path: &Path,
        epoch: usize,
        names: Vec<String>,
        policy: ClassNamePolicy,
    ) -> Result<Self, DecodeError> {
        if epoch == 0 {
            return Ok(Self::new(names));
        }
        match policy {
            ClassNamePolicy::Accumulate => {
                let mut merged = self.names;
                merged.extend(names);
                Ok(Self::new(merged))
            }
            ClassNamePolicy::FirstFile => {
                if names != self.names {
                    warn!(
                        "{} 的类别名列表与首个文件不同，已忽略: {:?}",
                        path.display(),
                        names
                    );
                }
                Ok(self)
            }
            ClassNamePolicy::Validate => {
                if names != self.names {
                    return Err(DecodeError::ClassNamesMismatch {
                        path: path.to_path_buf(),
                        expected: self.names,
                        actual: names,
                    });
                }
                Ok(self)
            }
        }
    }
}

/// epoch序号 → 预测类别名
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PredictionTable {
    predictions: BTreeMap<usize, String>,
}

impl PredictionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, epoch: usize) -> Option<&str> {
        self.predictions.get(&epoch).map(String::as_str)
    }

    /// 记录某个epoch的预测，返回新的表
    pub fn with_prediction(mut self, epoch: usize, label: String) -> Self {
        self.predictions.insert(epoch, label);
        self
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// 按epoch升序遍历
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.predictions
            .iter()
            .map(|(&epoch, label)| (epoch, label.as_str()))
    }
}
