//! Various unsorted geometrical and logical operators.

pub(crate) use self::sort::{sort2, sort3};

mod sort;
