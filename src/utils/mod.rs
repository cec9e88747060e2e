//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`ErrorBody`] - 错误响应结构
//! - 日志等工具

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, ErrorBody, ErrorDetail};
pub use result::AppResult;
