use crate::assert_err;
use crate::errors::TensorError;
use crate::tensor::Tensor;

#[test]
fn test_index_matrix() {
    // [[1, 2, 3],
    //  [4, 5, 6]]
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]).unwrap();
    assert_eq!(tensor[[0, 0]], 1.);
    assert_eq!(tensor[[0, 2]], 3.);
    assert_eq!(tensor[[1, 0]], 4.);
    assert_eq!(tensor[[1, 2]], 6.);
}

#[test]
fn test_get() {
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6., 7., 8.], &[2, 2, 2]).unwrap();
    assert_eq!(tensor.get(&[1, 0, 1]).unwrap(), 6.);
    assert_err!(
        tensor.get(&[2, 0, 0]),
        TensorError::IndexOutOfRange { .. }
    );
    // 索引维数与阶数不一致
    assert_err!(tensor.get(&[1, 0]), TensorError::IndexOutOfRange { .. });
}

#[test]
fn test_linear_index_is_row_major() {
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6., 7., 8.], &[2, 2, 2]).unwrap();
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                let t = tensor.linear_index(&[i, j, k]).unwrap();
                assert_eq!(t, i * 4 + j * 2 + k);
                assert_eq!(tensor.data_as_slice()[t], tensor[[i, j, k]]);
            }
        }
    }
    assert_err!(tensor.linear_index(&[0, 2, 0]));
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let tensor = Tensor::new(&[1., 2., 3.], &[1, 3]).unwrap();
    let _ = tensor[[1, 0]];
}
