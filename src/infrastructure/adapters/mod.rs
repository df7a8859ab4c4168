//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod epub;
pub mod remote;

pub use self::epub::*;
pub use remote::*;
