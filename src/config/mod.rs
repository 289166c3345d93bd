//! 加载配置
//!
//! [`LoadOptions`] 决定一次加载操作如何发现快照文件、如何给文件分配epoch序号、
//! 如何处理各文件里的类别名列表，以及如何从输出层激活值中选出预测类别。
//! 既可用代码构建，也可从 JSON 文件读取（缺省字段取默认值）。

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::snapshot::DecodeError;


/// 给快照文件分配epoch序号时所依据的排序键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpochOrder {
    /// 按文件名字典序（默认）
    #[default]
    FileName,
    /// 按文件名（不含扩展名）中最后一段数字的数值，如`epoch_10.json` → 10。
    /// 缺少数字或数字重复均视为排序有歧义
    EpochNumber,
}

/// 多个快照文件中类别名列表的合并方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassNamePolicy {
    /// 只取第一个文件的列表，之后不同的列表仅告警（默认）
    #[default]
    FirstFile,
    /// 只取第一个文件的列表，之后不同的列表视为错误
    Validate,
    /// 每个文件的列表都追加到表尾（旧导出工具链的行为，多epoch时会出现重复项）
    Accumulate,
}

/// 从输出层激活值选取最大值下标的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgmaxPolicy {
    /// 以第一个元素作为初始最大值，严格大于才更新（默认，权威行为）
    #[default]
    FirstElement,
    /// 以`0.0`作为初始最大值，严格大于才更新；全部激活值≤0时结果恒为下标0（旧行为）
    ZeroBaseline,
}

/// 一次加载操作的配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// 快照文件扩展名（不含点号，大小写不敏感）
    pub extension: String,
    pub order: EpochOrder,
    /// 最多处理的文件数（排序后截断），None 表示不限
    pub max_epochs: Option<usize>,
    pub class_names: ClassNamePolicy,
    pub argmax: ArgmaxPolicy,
    /// 层名中含此子串的层视为输出层
    pub output_marker: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            extension: "json".to_string(),
            order: EpochOrder::default(),
            max_epochs: None,
            class_names: ClassNamePolicy::default(),
            argmax: ArgmaxPolicy::default(),
            output_marker: "out".to_string(),
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn order(mut self, order: EpochOrder) -> Self {
        self.order = order;
        self
    }

    pub fn max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = Some(max_epochs);
        self
    }

    pub fn class_names(mut self, policy: ClassNamePolicy) -> Self {
        self.class_names = policy;
        self
    }

    pub fn argmax(mut self, policy: ArgmaxPolicy) -> Self {
        self.argmax = policy;
        self
    }

    pub fn output_marker(mut self, marker: &str) -> Self {
        self.output_marker = marker.to_string();
        self
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> Result<(), DecodeError> {
        if self.extension.is_empty() {
            return Err(DecodeError::Config("extension不能为空".to_string()));
        }
        if self.output_marker.is_empty() {
            return Err(DecodeError::Config("output_marker不能为空".to_string()));
        }
        if self.max_epochs == Some(0) {
            return Err(DecodeError::Config("max_epochs须>0".to_string()));
        }
        Ok(())
    }

    /// 从 JSON 字符串解析（缺省字段取默认值）
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| DecodeError::Config(format!("解析加载配置失败: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    /// 从 JSON 文件读取
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, DecodeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DecodeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
