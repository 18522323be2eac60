pub mod error;
pub mod gateway;
pub mod schema;
pub mod statements;

pub use error::StoreError;
pub use gateway::Gateway;
