pub mod model;
pub mod storage;
pub mod user_interface;

pub use model::Task;
