use admin_console::console::runtime::{event_channel, spawn_console_tasks};
use admin_console::simulator::run_customer_simulator;
use admin_console::tui::{self, TuiPresenter};
use admin_console::{
    AdminConsole, AppStore, BackgroundTasks, Config, ConsoleError, DataStore, Formatter,
    SharedStorage, StoreBus, TaskKind, print_banner, seed_defaults, setup_environment,
};
use anyhow::Context;
use std::time::Duration;

/// One simulated customer order every few seconds
const SIMULATOR_PERIOD: Duration = Duration::from_secs(8);

enum Mode {
    /// `admin-console login <username>`
    Login(String),
    Console { simulate_customers: bool },
}

fn parse_args() -> anyhow::Result<Mode> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("login") => {
            let username = args
                .get(1)
                .filter(|u| !u.trim().is_empty())
                .context("usage: admin-console login <username>")?;
            Ok(Mode::Login(username.trim().to_string()))
        }
        Some("--simulate-customers") => Ok(Mode::Console {
            simulate_customers: true,
        }),
        Some(other) => anyhow::bail!("unknown argument `{other}`"),
        None => Ok(Mode::Console {
            simulate_customers: false,
        }),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载配置 (.env 优先)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    let mode = parse_args()?;

    // 2. 设置环境 (工作目录, 日志)
    setup_environment(&config, matches!(mode, Mode::Console { .. }))?;

    // 3. 打开共享存储，首次启动写入默认数据
    let storage = SharedStorage::open(config.store_path())
        .with_context(|| format!("failed to open store at {}", config.store_path().display()))?;
    seed_defaults(&storage, config.table_count)?;
    let bus = StoreBus::with_capacity(config.bus_capacity);
    let mut store = AppStore::connect(storage.clone(), bus.clone())?;

    let simulate_customers = match mode {
        Mode::Login(username) => {
            let session = store.login(&username)?;
            println!("Sesión iniciada como {}", session.username);
            return Ok(());
        }
        Mode::Console { simulate_customers } => simulate_customers,
    };

    print_banner();

    // 4. 控制台 + 后台任务
    let presenter = TuiPresenter::new()?;
    let context = store.context_id();
    let mut console = AdminConsole::new(store, presenter, Formatter::new(&config.currency_symbol));
    match console.start() {
        Ok(()) => {}
        Err(ConsoleError::NoSession) => {
            drop(console);
            println!("No hay sesión activa. Inicia sesión con: admin-console login <usuario>");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let (tx, mut rx) = event_channel();
    let mut tasks = BackgroundTasks::new();
    spawn_console_tasks(&mut tasks, &config, &bus, context, tx);

    if simulate_customers {
        let customer = AppStore::connect(storage, bus.clone())?;
        let token = tasks.shutdown_token();
        tasks.spawn("customer_simulator", TaskKind::Worker, async move {
            run_customer_simulator(customer, SIMULATOR_PERIOD, token).await;
        });
    }
    tasks.log_summary();

    let result = tui::run(&mut console, &mut rx).await;

    // 5. 关闭
    drop(console);
    tasks.check_health();
    tasks.shutdown().await;
    result?;
    tracing::info!("Admin console stopped");
    Ok(())
}
