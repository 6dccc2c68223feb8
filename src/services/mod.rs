pub mod operations;

pub use operations::{Operation, OperationRunner};
