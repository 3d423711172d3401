pub mod config;
pub mod constants;
pub mod driver;
pub mod paint;
pub mod pool;
pub mod quotes;
pub mod shape;

pub use config::*;
pub use driver::*;
pub use paint::*;
pub use pool::*;
pub use quotes::*;
pub use shape::*;
