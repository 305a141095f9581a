mod logging;
mod report;
mod tui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use fantasy_card_core::{
    build_metric_series, CardConfig, FilePlayerSource, Metric, PlayerCardUseCase, PlayerSource,
};

use crate::logging::LogTarget;

#[derive(Parser)]
#[command(name = "fantasy-card")]
#[command(about = "Player profile card with weekly fantasy selection chart", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.fantasy-card/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print player cards as tables
    Show {
        /// JSON file holding an array of player records
        file: PathBuf,
        /// Only show this player (case-insensitive)
        #[arg(long)]
        player: Option<String>,
    },
    /// Print one player's weekly series as JSON
    Series {
        file: PathBuf,
        #[arg(long)]
        player: String,
        #[arg(long, value_enum, default_value_t = MetricArg::Selection)]
        metric: MetricArg,
    },
    /// List player names
    List {
        file: PathBuf,
    },
    /// Open the dashboard
    Tui {
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Selection,
    Points,
    In,
    Out,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Selection => Metric::SelectionCount,
            MetricArg::Points => Metric::WeekPoints,
            MetricArg::In => Metric::TransfersIn,
            MetricArg::Out => Metric::TransfersOut,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CardConfig::load(cli.config.as_deref())?;

    let target = match cli.command {
        Commands::Tui { .. } => LogTarget::File(CardConfig::data_dir()?),
        _ => LogTarget::Stderr,
    };
    logging::init(&config.log.level, target)?;

    match cli.command {
        Commands::Show { file, player } => {
            let source = FilePlayerSource::new(file);
            let mut usecase = PlayerCardUseCase::new(&source, &config);
            match player {
                Some(name) => {
                    let view = usecase
                        .card_for(&name)?
                        .ok_or_else(|| anyhow!("Player '{}' not found", name))?;
                    println!("{}", report::render_card(&view));
                }
                None => {
                    let players = source.list()?;
                    if players.is_empty() {
                        println!("No players found.");
                    }
                    for player in &players {
                        println!("{}\n", report::render_card(&usecase.build_view(player)));
                    }
                }
            }
        }
        Commands::Series { file, player, metric } => {
            let source = FilePlayerSource::new(file);
            let record = source
                .find(&player)?
                .ok_or_else(|| anyhow!("Player '{}' not found", player))?;
            let series = build_metric_series(&record.week_stats, metric.into())
                .with_context(|| format!("could not build series for {}", record.name))?;
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        Commands::List { file } => {
            let source = FilePlayerSource::new(file);
            let usecase = PlayerCardUseCase::new(&source, &config);
            for name in usecase.player_names()? {
                println!("{}", name);
            }
        }
        Commands::Tui { file } => {
            let source = FilePlayerSource::new(file);
            let players = source.list()?;
            tracing::info!(path = %source.path().display(), players = players.len(), "opening dashboard");
            let usecase = PlayerCardUseCase::new(&source, &config);
            let mut app = tui::app::App::new(usecase, players);
            tui::run(&mut app)?;
        }
    }
    Ok(())
}
