//! Cafe Server - cafe 记录管理服务
//!
//! # 架构概述
//!
//! 单二进制 HTTP 服务：一张 SQLite 表存放 cafe 记录，axum 路由提供浏览页面
//! (HTML) 和记录管理接口 (JSON)。
//!
//! # 模块结构
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (SQLite + migrations)
//! ├── web/           # HTML 页面渲染
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;
pub mod web;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, build_app};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};
