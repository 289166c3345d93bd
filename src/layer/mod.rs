/*
 * @Description  : 按层名推断层类型
 *
 * 导出端没有显式写出层类型，只能从层名里的关键字推断。
 * 匹配规则按固定优先级做大小写敏感的子串匹配，先命中者胜出；
 * 例如同时含`fc`与`maxpool`的层名会被判为全连接层。此启发式需与现有导出名保持兼容，不可随意调整顺序。
 */

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};


/// 层的语义类型。
/// 注：“输出层”不是独立类型，它由层名（默认含`out`）或在层列表中的位置决定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerType {
    Image,
    Convolution,
    MaxPool,
    FullyConnected,
}

/// 层名关键字 → 层类型的优先级表（自上而下匹配）
pub const CLASSIFICATION_PRIORITY: [(&str, LayerType); 4] = [
    ("conv", LayerType::Convolution),
    ("input", LayerType::Image),
    ("fc", LayerType::FullyConnected),
    ("maxpool", LayerType::MaxPool),
];

/// 所有关键字都未命中时的默认类型
pub const DEFAULT_LAYER_TYPE: LayerType = LayerType::Image;

impl LayerType {
    /// 由层名推断层类型，见`CLASSIFICATION_PRIORITY`
    pub fn from_name(name: &str) -> Self {
        CLASSIFICATION_PRIORITY
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map_or(DEFAULT_LAYER_TYPE, |&(_, layer_type)| layer_type)
    }
}

impl Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = match self {
            LayerType::Image => "图像",
            LayerType::Convolution => "卷积",
            LayerType::MaxPool => "最大池化",
            LayerType::FullyConnected => "全连接",
        };
        write!(f, "{}", type_name)
    }
}
