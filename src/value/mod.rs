//! The read-only view of values observed at a call boundary.
pub mod tag;
pub mod thunk;
pub mod view;

pub use tag::ValueTag;
pub use thunk::Thunk;
pub use view::{Call, Complex, ListValue, Value, NA_INTEGER, NA_LOGICAL};
