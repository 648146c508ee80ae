use crate::algorithm::AllPairsAlgorithm;
use crate::algorithm::floyd_warshall::FloydWarshall;
use crate::graph::WeightMatrix;
use libc::size_t;

/// Row-major result buffers of `len = n * n` entries each.
/// Unreachable pairs hold `+∞` in `distances`.
#[repr(C)]
pub struct FfiResult {
    distances: *mut f64,
    successors: *mut size_t,
    len: size_t,
}

/// Computes all-pairs shortest paths over a row-major `n × n` matrix where
/// `+∞` marks a missing edge. Returns null on invalid input.
#[no_mangle]
pub extern "C" fn route_matrix_compute(weights: *const f64, n: size_t) -> *mut FfiResult {
    if weights.is_null() || n == 0 {
        return std::ptr::null_mut();
    }
    let Some(len) = n.checked_mul(n) else {
        return std::ptr::null_mut();
    };

    let buffer = unsafe { std::slice::from_raw_parts(weights, len) }.to_vec();
    let matrix = match WeightMatrix::from_row_major(n, buffer) {
        Ok(matrix) => matrix,
        Err(err) => {
            log::debug!("route_matrix_compute rejected input: {}", err);
            return std::ptr::null_mut();
        }
    };

    match FloydWarshall::new().compute(&matrix) {
        Ok(result) => {
            let distances: Box<[f64]> = result.distances.to_rows().concat().into_boxed_slice();
            let successors: Box<[size_t]> = result.successors.to_rows().concat().into_boxed_slice();
            Box::into_raw(Box::new(FfiResult {
                distances: Box::into_raw(distances) as *mut f64,
                successors: Box::into_raw(successors) as *mut size_t,
                len,
            }))
        }
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases a result returned by [`route_matrix_compute`]. Null is ignored.
#[no_mangle]
pub extern "C" fn route_matrix_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            let res = Box::from_raw(res);
            if !res.distances.is_null() {
                drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(res.distances, res.len)));
            }
            if !res.successors.is_null() {
                drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(res.successors, res.len)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_and_free() {
        let inf = f64::INFINITY;
        let weights = [0.0, 1.0, 5.0, inf, 0.0, 1.0, inf, inf, 0.0];
        let res = route_matrix_compute(weights.as_ptr(), 3);
        assert!(!res.is_null());
        unsafe {
            let distances = std::slice::from_raw_parts((*res).distances, (*res).len);
            let successors = std::slice::from_raw_parts((*res).successors, (*res).len);
            assert_eq!(distances[2], 2.0);
            assert_eq!(successors[2], 1);
            assert_eq!(distances[3], inf);
        }
        route_matrix_result_free(res);
    }

    #[test]
    fn test_single_vertex_round_trip_and_null_free() {
        let weights = [2.5];
        let res = route_matrix_compute(weights.as_ptr(), 1);
        assert!(!res.is_null());
        unsafe {
            assert_eq!((*res).len, 1);
            assert_eq!(*(*res).distances, 2.5);
            assert_eq!(*(*res).successors, 0);
        }
        route_matrix_result_free(res);
        route_matrix_result_free(std::ptr::null_mut());
    }

    #[test]
    fn test_invalid_input_returns_null() {
        let weights = [0.0, f64::NAN, 1.0, 0.0];
        assert!(route_matrix_compute(weights.as_ptr(), 2).is_null());
        assert!(route_matrix_compute(std::ptr::null(), 2).is_null());
    }
}
