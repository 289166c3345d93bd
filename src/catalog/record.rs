use crate::layer::LayerType;
use crate::snapshot::DecodedLayer;
use crate::tensor::Tensor;

/// 单层在所有已处理epoch上的记录。
/// `weight_tensors`与`activation_tensors`按epoch顺序排列，长度恒等于已处理的epoch数，
/// 且每个张量的形状都与`weight_shape`/`activation_shape`一致。
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRecord {
    name: String,
    class_label: String,
    layer_type: LayerType,
    weight_shape: Vec<usize>,
    weight_tensors: Vec<Tensor>,
    activation_shape: Vec<usize>,
    activation_tensors: Vec<Tensor>,
}

impl LayerRecord {
    /// 由首个epoch的解码结果创建记录，层类型由层名推断
    pub(crate) fn first_epoch(layer: DecodedLayer) -> Self {
        Self {
            layer_type: LayerType::from_name(&layer.name),
            weight_shape: layer.weight.shape().to_vec(),
            activation_shape: layer.activation.shape().to_vec(),
            name: layer.name,
            class_label: layer.class_label,
            weight_tensors: vec![layer.weight],
            activation_tensors: vec![layer.activation],
        }
    }

    /// 追加一个epoch的张量，返回新的记录。形状须已由调用方校验
    pub(crate) fn with_epoch(mut self, weight: Tensor, activation: Tensor) -> Self {
        self.weight_tensors.push(weight);
        self.activation_tensors.push(activation);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 导出时附带的类名（取自首个epoch），仅用于展示
    pub fn class_label(&self) -> &str {
        &self.class_label
    }

    pub fn layer_type(&self) -> LayerType {
        self.layer_type
    }

    pub fn weight_shape(&self) -> &[usize] {
        &self.weight_shape
    }

    pub fn activation_shape(&self) -> &[usize] {
        &self.activation_shape
    }

    pub fn weight_tensors(&self) -> &[Tensor] {
        &self.weight_tensors
    }

    pub fn activation_tensors(&self) -> &[Tensor] {
        &self.activation_tensors
    }

    pub fn weight_at(&self, epoch: usize) -> Option<&Tensor> {
        self.weight_tensors.get(epoch)
    }

    pub fn activation_at(&self, epoch: usize) -> Option<&Tensor> {
        self.activation_tensors.get(epoch)
    }

    pub fn epoch_count(&self) -> usize {
        self.weight_tensors.len()
    }

    /// 层名中是否含输出层标记（大小写敏感）
    pub fn is_output(&self, marker: &str) -> bool {
        self.name.contains(marker)
    }
}
