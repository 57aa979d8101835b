use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, warn};

use lms_dashboard::config::AppConfig;
use lms_dashboard::errors::LmsError;
use lms_dashboard::runtime::lifetime;
use lms_dashboard::services::QueryClient;
use lms_dashboard::services::submissions::DEFAULT_RECENT_LIMIT;

#[tokio::main]
async fn main() -> Result<(), LmsError> {
    dotenv().ok();

    let start_time = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    AppConfig::init()?;
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    warn!(
        "Starting {}
        Project: {}
        Version: {}",
        config.app.system_name,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );

    let startup = lifetime::startup::prepare_startup(config);

    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_time)
            .num_milliseconds()
    );

    if let Err(e) = run_demo(&startup.client).await {
        report_error(&e, config.is_development());
        return Err(e);
    }

    Ok(())
}

async fn run_demo(client: &QueryClient) -> Result<(), LmsError> {
    let user = client
        .api()
        .auth()
        .login(lifetime::startup::DEMO_EMAIL, lifetime::startup::DEMO_PASSWORD)
        .await?;
    warn!("Signed in as {} ({})", user.name, user.role);

    let stats = client.dashboard_stats().await?;
    let recent = client.recent_submissions(DEFAULT_RECENT_LIMIT).await?;

    println!("{}", serde_json::to_string_pretty(&stats)?);
    println!("{}", serde_json::to_string_pretty(&recent)?);
    Ok(())
}

// 开发环境下额外输出带颜色的错误详情
#[cfg(debug_assertions)]
fn report_error(err: &LmsError, development: bool) {
    if development {
        eprintln!("{}", err.format_colored());
    }
    error!("{}", err.format_simple());
}

#[cfg(not(debug_assertions))]
fn report_error(err: &LmsError, _development: bool) {
    error!("{}", err.format_simple());
}
