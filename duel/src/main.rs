mod console_observer;

use std::io::Write;

use clap::Parser;
use common::config::{ConfigManager, DuelConfig, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{DuelReport, DuelSettings, run_duel};
use common::logger;
use console_observer::ConsoleObserver;

const CONFIG_FILE_NAME: &str = "tictactoe_duel_config.yaml";

#[derive(Parser)]
#[command(name = "tictactoe_duel", about = "Two random players fight it out on separate threads")]
struct Args {
    /// YAML config file; missing file means defaults
    #[arg(long)]
    config: Option<String>,

    /// Pause after every move attempt, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Seed for both players' random moves
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

fn load_config(args: &Args) -> Result<DuelConfig, String> {
    let path = args.config.clone().unwrap_or_else(get_config_path);
    let manager: ConfigManager<FileContentConfigProvider, DuelConfig, YamlConfigSerializer> =
        ConfigManager::from_yaml_file(path);
    let mut config = manager.get_config()?;

    if let Some(delay_ms) = args.delay_ms {
        config.move_delay_ms = delay_ms;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    config.validate()?;
    Ok(config)
}

/// Writes the closing result. Nothing is printed after this.
fn write_outcome<W: Write>(out: &mut W, report: &DuelReport) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", report.summary())?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Duel".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args)?;
    let settings = DuelSettings::from_config(&config);

    let report = run_duel(&settings, &ConsoleObserver);

    write_outcome(&mut std::io::stdout().lock(), &report)?;

    Ok(())
}
