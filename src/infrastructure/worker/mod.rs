//! Worker Layer - 后台任务
//!
//! 实现 ResourceSweeper，定期回收闲置的书籍与音频

mod resource_sweeper;

pub use resource_sweeper::{ResourceSweeper, SweeperConfig, SweepReport};
