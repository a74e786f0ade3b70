use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use catalog_suggest::config::{self, Config};
use catalog_suggest::{
    ControlGate, HttpCatalogSource, QueryCoordinator, SuggestionCache, TerminalPresenter,
};

/// Suggest catalog names as you type
///
/// Each line read from stdin is one input-change event.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Suggest catalog names as you type, backed by a remote catalog"
)]
struct Args {
    /// Catalog endpoint the lookup is POSTed to (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Quiet period in milliseconds before searching (overrides config)
    #[arg(long)]
    search_wait_ms: Option<u64>,

    /// Quiet period in milliseconds before re-evaluating the control (overrides config)
    #[arg(long)]
    control_wait_ms: Option<u64>,
}

impl Args {
    fn apply(self, mut config: Config) -> Config {
        if let Some(endpoint) = self.endpoint {
            config.remote.endpoint = endpoint;
        }
        if let Some(ms) = self.search_wait_ms {
            config.debounce.search_ms = ms;
        }
        if let Some(ms) = self.control_wait_ms {
            config.debounce.control_ms = ms;
        }
        config
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/catalog-suggest-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/catalog-suggest-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== CATALOG-SUGGEST DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config before parsing args so flags can override it
    let config_result = config::load_config();

    let args = Args::parse();

    if let Some(warning) = &config_result.warning {
        eprintln!("warning: {}", warning);
    }
    let config = args.apply(config_result.config);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(config))?;

    #[cfg(debug_assertions)]
    log::debug!("=== CATALOG-SUGGEST DEBUG SESSION ENDED ===");

    Ok(())
}

async fn run(config: Config) -> Result<()> {
    let source = HttpCatalogSource::from_config(&config.remote)?;
    let presenter = Arc::new(TerminalPresenter::stdout());
    let cache = SuggestionCache::shared();

    let coordinator = Arc::new(QueryCoordinator::new(
        Arc::clone(&cache),
        source,
        Arc::clone(&presenter),
    ));
    let gate = Arc::new(ControlGate::new(cache, presenter));

    let mut search = coordinator.debounced(Duration::from_millis(config.debounce.search_ms));
    let mut control = gate.debounced(Duration::from_millis(config.debounce.control_ms));

    let mut input = spawn_stdin_reader();
    while let Some(line) = input.recv().await {
        search.trigger(line.clone());
        control.trigger(line);
    }

    // Let the last scheduled lookup finish before exiting
    search.settle().await;
    control.settle().await;

    Ok(())
}

/// Read stdin lines on a dedicated thread and forward them to the runtime
fn spawn_stdin_reader() -> UnboundedReceiver<String> {
    let (tx, rx) = unbounded_channel();

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::error!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    rx
}
