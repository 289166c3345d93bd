use crate::assert_err;
use crate::errors::TensorError;
use crate::tensor::Tensor;

#[test]
fn test_new_vector_and_matrix() {
    let tensor = Tensor::new(&[1., 2., 3.], &[3]).unwrap();
    assert_eq!(tensor.shape(), &[3]);
    assert_eq!(tensor.dimension(), 1);
    assert_eq!(tensor.size(), 3);

    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]).unwrap();
    assert_eq!(tensor.shape(), &[2, 3]);
    assert_eq!(tensor.dimension(), 2);
    assert_eq!(tensor.data_as_slice(), &[1., 2., 3., 4., 5., 6.]);
}

#[test]
fn test_new_high_rank() {
    // 卷积核常见的[h, w, in, out]布局
    let data: Vec<f32> = (0..5 * 5 * 1 * 4).map(|x| x as f32).collect();
    let tensor = Tensor::from_vec(data, &[5, 5, 1, 4]).unwrap();
    assert_eq!(tensor.shape(), &[5, 5, 1, 4]);
    assert_eq!(tensor.size(), 100);
}

#[test]
fn test_new_data_length_mismatch() {
    assert_err!(
        Tensor::new(&[1., 2.], &[1, 3]),
        TensorError::DataLengthMismatch { expected: 3, actual: 2, .. }
    );
}

#[test]
fn test_new_invalid_shape() {
    assert_err!(Tensor::new(&[1.], &[]), TensorError::EmptyShape);
    let result = Tensor::new(&[], &[2, 0]);
    assert_eq!(result, Err(TensorError::ZeroDimension { dimension: 1 }));
    assert_eq!(result.unwrap_err().to_string(), "形状的第1维须>0");
}

#[test]
fn test_is_same_shape() {
    let a = Tensor::new(&[1., 2., 3., 4.], &[1, 4]).unwrap();
    let b = Tensor::new(&[4., 3., 2., 1.], &[1, 4]).unwrap();
    let c = Tensor::new(&[1., 2., 3., 4.], &[4]).unwrap();
    assert!(a.is_same_shape(&b));
    assert!(!a.is_same_shape(&c));
    assert_ne!(a, c);
}

#[test]
fn test_new_shape_overflow() {
    // 元素总数溢出时报错，而不是回绕成一个小的总数
    let shape = [usize::MAX, 2];
    assert_eq!(
        Tensor::new(&[], &shape),
        Err(TensorError::ShapeOverflow {
            shape: shape.to_vec()
        })
    );
    assert_err!(
        Tensor::new(&[1., 2.], &[1 << 40, 1 << 40]),
        TensorError::ShapeOverflow { .. }
    );
}
