//! Reflect-101 border index mapping.
//!
//! Out-of-range sample positions mirror around the edge pixel without
//! repeating it:
//!
//! ```text
//! gfedcb | abcdefgh | gfedcba
//! ```

/// Map a possibly out-of-range coordinate into `[0, len)`.
///
/// `len` must be non-zero. Offsets further than one image width away keep
/// bouncing between the two edges.
#[inline]
pub fn reflect_101(pos: isize, len: usize) -> usize {
    debug_assert!(len > 0, "reflect_101 on an empty axis");
    if len == 1 {
        return 0;
    }

    let last = len as isize - 1;
    let mut p = pos;
    while p < 0 || p > last {
        if p < 0 {
            p = -p;
        } else {
            p = 2 * last - p;
        }
    }
    p as usize
}
