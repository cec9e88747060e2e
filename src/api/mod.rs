//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`cafes`] - cafe 记录管理接口和浏览页面

pub mod cafes;
pub mod health;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
