pub mod shared;
pub mod create_pool;
pub mod swap;


pub use create_pool::*;
pub use swap::*;
