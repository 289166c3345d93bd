mod loader;

use crate::snapshot::DecodedLayer;
use crate::tensor::Tensor;

/// 权重/激活值均以`value`填满的单层解码结果
pub(super) fn decoded(
    name: &str,
    weight_shape: &[usize],
    activation_shape: &[usize],
    value: f32,
) -> DecodedLayer {
    let filled = |shape: &[usize]| {
        Tensor::from_vec(vec![value; shape.iter().product()], shape).unwrap()
    };
    DecodedLayer {
        class_label: "cnn".to_string(),
        name: name.to_string(),
        weight: filled(weight_shape),
        activation: filled(activation_shape),
    }
}

pub(super) fn three_layers(value: f32) -> Vec<DecodedLayer> {
    vec![
        decoded("input_0", &[1, 4, 4, 1], &[1, 4, 4, 1], value),
        decoded("conv_1", &[3, 3, 1, 2], &[1, 4, 4, 2], value),
        decoded("fc_out", &[32, 3], &[1, 3], value),
    ]
}
