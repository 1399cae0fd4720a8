pub mod icons;
mod task;

pub use task::{TaskId, TaskSeq};
