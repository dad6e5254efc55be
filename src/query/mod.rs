//! Non-persistent geometric queries.

pub mod gjk;
