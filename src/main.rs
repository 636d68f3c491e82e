/// kick-addon 入口
/// 启动 HTTP 服务

use tracing::{error, info};

use kick_addon::config::AddonConfig;
use kick_addon::routes::build_router;
use kick_addon::state::AppState;

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AddonConfig::from_env();

    println!(
        r#"
╔══════════════════════════════════════╗
║        kick-addon v0.1.0 (Rust)      ║
║     Kick.com 直播 → 媒体中心插件     ║
╚══════════════════════════════════════╝
"#
    );
    println!("Kick API:   {}", config.kick_api_base);
    println!("监听地址:   http://{}", config.bind_addr());
    println!("上游超时:   {} ms", config.upstream_timeout_ms);
    println!("缓存 TTL:   {} s", config.stream_cache_ttl_secs);
    println!();

    let state = match AppState::from_config(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!("HTTP 客户端初始化失败: {}", e);
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("无法绑定 {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("✅ 服务已启动: http://{}/manifest.json", addr);

    if let Err(e) = axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("服务异常退出: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("收到退出信号，正在关闭...");
    }
}
