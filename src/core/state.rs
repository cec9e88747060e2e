//! Shared server state

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 每个请求处理器共享的依赖
///
/// ServerState 持有配置和数据库连接池，通过 axum `State` 显式注入每个
/// handler。连接池内部引用计数，Clone 成本极低。
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config).await?;
/// let app = build_app().with_state(state);
/// ```
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// Opens the database, creating the file and applying the schema
    /// migrations on first start.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
        })
    }
}
