use serde_json::{Value, json};
use std::path::Path;
use tempfile::TempDir;

use crate::assert_err;
use crate::catalog::{CatalogLoader, CatalogSlot};
use crate::config::{ClassNamePolicy, EpochOrder, LoadOptions};
use crate::layer::LayerType;
use crate::snapshot::{DecodeError, Inconsistency};
use crate::tensor::Tensor;

fn entry(name: &str, weight: &Tensor, activation: &Tensor) -> Value {
    json!([
        "cnn",
        name,
        weight.shape(),
        weight.to_nested(),
        activation.shape(),
        activation.to_nested()
    ])
}

/// 三层网络（input/conv/fc_out）在某个epoch的快照，权重全部为`fill`，输出层激活值为`logits`
fn epoch_document(fill: f32, logits: [f32; 3]) -> Value {
    let filled = |shape: &[usize]| {
        Tensor::from_vec(vec![fill; shape.iter().product()], shape).unwrap()
    };
    json!([
        entry("input_0", &filled(&[1, 2, 2, 1]), &filled(&[1, 2, 2, 1])),
        entry("conv_1", &filled(&[3, 3, 1, 2]), &filled(&[1, 2, 2, 2])),
        entry("fc_out", &filled(&[8, 3]), &Tensor::new(&logits, &[1, 3]).unwrap()),
        ["cat", "dog", "bird"]
    ])
}

fn write(dir: &TempDir, file: &str, document: &Value) {
    std::fs::write(dir.path().join(file), document.to_string()).unwrap();
}

fn two_epoch_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "epoch_0.json", &epoch_document(0.5, [0.1, 0.9, 0.05]));
    write(&dir, "epoch_1.json", &epoch_document(1.5, [0.8, 0.1, 0.1]));
    write(&dir, "notes.txt", &json!("ignored"));
    dir
}

#[test]
fn test_load_dir() {
    let dir = two_epoch_dir();
    let loaded = CatalogLoader::default().load_dir(dir.path()).unwrap();

    assert_eq!(loaded.epoch_count(), 2);
    assert_eq!(loaded.sources.len(), 2);
    assert!(loaded.sources[0].ends_with("epoch_0.json"));
    assert!(loaded.sources[1].ends_with("epoch_1.json"));
    assert_eq!(loaded.catalog.len(), 3);
    assert_eq!(loaded.class_names.names(), ["cat", "dog", "bird"]);

    let conv = loaded.catalog.record("conv_1").unwrap();
    assert_eq!(conv.layer_type(), LayerType::Convolution);
    assert_eq!(conv.weight_shape(), &[3, 3, 1, 2]);
    assert_eq!(conv.weight_tensors().len(), 2);
    assert_eq!(conv.weight_at(0).unwrap()[[2, 2, 0, 1]], 0.5);
    assert_eq!(conv.weight_at(1).unwrap()[[2, 2, 0, 1]], 1.5);

    assert_eq!(loaded.predictions.get(0), Some("dog"));
    assert_eq!(loaded.predictions.get(1), Some("cat"));
}

#[test]
fn test_load_files_in_given_order() {
    let dir = two_epoch_dir();
    let files = [dir.path().join("epoch_1.json"), dir.path().join("epoch_0.json")];
    let loaded = CatalogLoader::default().load_files(&files).unwrap();
    assert_eq!(loaded.predictions.get(0), Some("cat"));
    assert_eq!(loaded.predictions.get(1), Some("dog"));
}

#[test]
fn test_epoch_number_order_and_max_epochs() {
    let dir = tempfile::tempdir().unwrap();
    write(&dir, "epoch_2.json", &epoch_document(2., [0., 0., 1.]));
    write(&dir, "epoch_10.json", &epoch_document(10., [1., 0., 0.]));
    write(&dir, "epoch_9.json", &epoch_document(9., [0., 1., 0.]));

    // 字典序下epoch_10排在最前
    let by_name = CatalogLoader::default().load_dir(dir.path()).unwrap();
    assert_eq!(by_name.predictions.get(0), Some("cat"));

    let options = LoadOptions::new().order(EpochOrder::EpochNumber).max_epochs(2);
    let loaded = CatalogLoader::new(options).load_dir(dir.path()).unwrap();
    assert_eq!(loaded.epoch_count(), 2);
    assert_eq!(loaded.predictions.get(0), Some("bird"));
    assert_eq!(loaded.predictions.get(1), Some("dog"));
}

#[test]
fn test_missing_or_empty_dir_gives_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = CatalogLoader::default().load_dir(dir.path()).unwrap();
    assert!(loaded.catalog.is_empty());
    assert_eq!(loaded.epoch_count(), 0);
    assert!(loaded.predictions.is_empty());

    let missing = dir.path().join("no_such_dir");
    let loaded = CatalogLoader::default().load_dir(&missing).unwrap();
    assert!(loaded.catalog.is_empty());
    assert!(loaded.sources.is_empty());
}

#[test]
fn test_layer_count_mismatch_aborts_load() {
    let dir = two_epoch_dir();
    let mut truncated = epoch_document(2.5, [0., 0., 1.]);
    truncated.as_array_mut().unwrap().remove(1);
    write(&dir, "epoch_2.json", &truncated);

    assert_err!(
        CatalogLoader::default().load_dir(dir.path()),
        DecodeError::CrossEpochInconsistency {
            epoch: 2,
            detail: Inconsistency::LayerCount { expected: 3, actual: 2 },
            ..
        }
    );
}

#[test]
fn test_invalid_file_aborts_load() {
    let dir = two_epoch_dir();
    std::fs::write(dir.path().join("epoch_2.json"), "[1, 2").unwrap();
    assert_err!(
        CatalogLoader::default().load_dir(dir.path()),
        DecodeError::Json { path, .. } if path.ends_with("epoch_2.json")
    );
}

#[test]
fn test_class_name_policies() {
    let dir = two_epoch_dir();
    let mut renamed = epoch_document(2.5, [0., 0., 1.]);
    *renamed.as_array_mut().unwrap().last_mut().unwrap() = json!(["a", "b", "c"]);
    write(&dir, "epoch_2.json", &renamed);

    let loaded = CatalogLoader::default().load_dir(dir.path()).unwrap();
    assert_eq!(loaded.class_names.len(), 3);
    assert_eq!(loaded.predictions.get(2), Some("bird"));

    let accumulate = LoadOptions::new().class_names(ClassNamePolicy::Accumulate);
    let loaded = CatalogLoader::new(accumulate).load_dir(dir.path()).unwrap();
    assert_eq!(loaded.class_names.len(), 9);
    assert_eq!(loaded.class_names.get(8), Some("c"));

    let validate = LoadOptions::new().class_names(ClassNamePolicy::Validate);
    assert_err!(
        CatalogLoader::new(validate).load_dir(dir.path()),
        DecodeError::ClassNamesMismatch { .. }
    );
}

#[test]
fn test_invalid_options_rejected() {
    let loader = CatalogLoader::new(LoadOptions::new().extension(""));
    assert_err!(
        loader.load_dir(Path::new(".")),
        DecodeError::Config("extension不能为空")
    );
}

#[test]
fn test_slot_keeps_previous_result_on_failure() {
    let dir = two_epoch_dir();
    let loader = CatalogLoader::default();
    let mut slot = CatalogSlot::new();
    assert!(slot.current().is_none());

    let epochs = slot.reload(&loader, dir.path()).unwrap().epoch_count();
    assert_eq!(epochs, 2);

    std::fs::write(dir.path().join("epoch_2.json"), "{}").unwrap();
    assert_err!(
        slot.reload(&loader, dir.path()),
        DecodeError::Schema { .. }
    );
    let current = slot.current().unwrap();
    assert_eq!(current.epoch_count(), 2);
    assert_eq!(current.predictions.get(1), Some("cat"));

    write(&dir, "epoch_2.json", &epoch_document(2.5, [0., 0., 1.]));
    assert_eq!(slot.reload(&loader, dir.path()).unwrap().epoch_count(), 3);
    assert_eq!(slot.take().unwrap().predictions.get(2), Some("bird"));
    assert!(slot.current().is_none());
}
