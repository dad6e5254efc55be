/// Sorts a pair of indices in increasing order.
#[inline]
pub fn sort2(a: usize, b: usize) -> (usize, usize) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Sorts a set of three indices in increasing order.
#[inline]
pub fn sort3(a: usize, b: usize, c: usize) -> (usize, usize, usize) {
    let (a, b) = sort2(a, b);
    let (b, c) = sort2(b, c);
    let (a, b) = sort2(a, b);
    (a, b, c)
}
