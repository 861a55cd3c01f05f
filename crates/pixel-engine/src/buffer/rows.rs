//! Row sharding for bulk transforms.
//!
//! With the `parallel` feature each output row is handed to a rayon worker;
//! without it the same closure runs over the rows in order. Rows are
//! disjoint `&mut` slices, so the closure can only read shared state.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Run `f(y, row)` for every `stride`-byte row of `data`.
///
/// A zero stride (zero-width image) has no rows and is a no-op.
pub(crate) fn for_each_row_mut<F>(data: &mut [u8], stride: usize, f: F)
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    if stride == 0 || data.is_empty() {
        return;
    }

    #[cfg(feature = "parallel")]
    data.par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| f(y, row));

    #[cfg(not(feature = "parallel"))]
    data.chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_see_their_index() {
        let mut data = vec![0u8; 12];
        for_each_row_mut(&mut data, 4, |y, row| row.fill(y as u8 + 1));
        assert_eq!(data, [1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn test_zero_stride_is_noop() {
        let mut data: Vec<u8> = Vec::new();
        for_each_row_mut(&mut data, 0, |_, _| unreachable!());
        assert!(data.is_empty());
    }
}
