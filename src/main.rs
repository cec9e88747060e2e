use cafe_server::{Config, Server, ServerState, init_logger_with_file};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // 加载配置 (生产环境缺失 API_KEY 时直接失败)
    let config = Config::from_env()?;

    init_logger_with_file(config.log_dir.as_deref());

    tracing::info!("Starting cafe-server (env: {})", config.environment);

    // 初始化服务器状态 (打开数据库、应用 migrations)
    let state = ServerState::initialize(&config).await?;

    // 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}
