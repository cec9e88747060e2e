//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 服务器配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件在启动时加载)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_PATH | cafes.db | SQLite 数据库文件 |
/// | HTTP_PORT | 5005 | HTTP 服务端口 |
/// | API_KEY | (仅开发环境有默认值) | 删除操作共享密钥 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_DIR | (未设置) | 日志文件目录，未设置时仅控制台输出 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/cafes.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 数据库文件路径，首次启动时自动创建
    pub database_path: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 删除操作 (report-closed) 的共享密钥
    pub api_key: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志文件目录 (可选)
    pub log_dir: Option<String>,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development
    /// environments. Development falls back to the given default.
    fn require_secret(name: &str, environment: &str, dev_default: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                dev_default.to_string()
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值；生产环境下缺失 API_KEY 会报错
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "cafes.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5005),
            // Development default is the key the historical clients already use
            api_key: Self::require_secret("API_KEY", &environment, "TopSecretAPIKey")?,
            environment,
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        })
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(
        database_path: impl Into<String>,
        http_port: u16,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            database_path: database_path.into(),
            http_port,
            api_key: api_key.into(),
            environment: "development".into(),
            log_dir: None,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
