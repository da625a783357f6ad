use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand, ValueEnum};
use rainbow_bar_core::{Color, NotchSize, RainbowBar, RainbowBarConfig, WaveQueueState};
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::TerminalRenderer;

fn main() -> rainbow_bar_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_animation(args),
        Commands::Config { output } => run_config(output.as_ref()),
    }
}

fn run_animation(args: RunArgs) -> rainbow_bar_core::Result<()> {
    let config = args.resolve_config()?;
    tracing::info!(
        period = config.wave_emit_period,
        waves = config.visible_waves_count,
        colors = config.palette.len(),
        "starting rainbow bar"
    );

    let fps = args.fps.max(1);
    let step = 1.0 / fps as f64;
    let mut bar = RainbowBar::new(&config, args.width)?;
    let mut renderer = TerminalRenderer::new(std::io::stdout().lock());

    bar.set_running(true);
    let mut elapsed = 0.0;
    let mut stopped = false;
    while elapsed < args.seconds {
        if !stopped && elapsed >= args.stop_after {
            bar.set_running(false);
            stopped = true;
        }

        bar.tick(step);
        bar.render(&mut renderer)?;
        elapsed += step;

        if stopped && bar.state() == WaveQueueState::Idle {
            tracing::info!(elapsed, "rainbow bar drained");
            break;
        }
        if !args.fast {
            std::thread::sleep(Duration::from_secs_f64(step));
        }
    }

    renderer.finish()
}

fn run_config(output: Option<&PathBuf>) -> rainbow_bar_core::Result<()> {
    let json = RainbowBarConfig::default().to_json_pretty()?;
    match output {
        Some(path) => {
            tracing::info!(?path, "writing default configuration");
            std::fs::write(path, json)?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Rainbow status-bar wave animation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Animate the bar in the terminal, then stop it and let it drain.
    Run(RunArgs),
    /// Print the default configuration as JSON.
    Config {
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seconds between consecutive waves.
    #[arg(long)]
    period: Option<f64>,
    /// Number of waves in the initial burst.
    #[arg(long)]
    waves: Option<usize>,
    /// Comma separated hex colors, e.g. `#ff0000,#00ff00`.
    #[arg(long, value_delimiter = ',')]
    palette: Option<Vec<Color>>,
    #[arg(long)]
    background: Option<Color>,
    #[arg(long, value_enum)]
    notch: Option<NotchArg>,
    /// Width of each half of the bar, in terminal cells.
    #[arg(long, default_value_t = 32)]
    width: usize,
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Hard limit on the run time, in seconds.
    #[arg(long, default_value_t = 12.0)]
    seconds: f64,
    /// Stop the bar after this many seconds.
    #[arg(long, default_value_t = 6.0)]
    stop_after: f64,
    /// Do not pace frames in real time.
    #[arg(long)]
    fast: bool,
}

impl RunArgs {
    fn resolve_config(&self) -> rainbow_bar_core::Result<RainbowBarConfig> {
        let mut config = match &self.config {
            Some(path) => RainbowBarConfig::load(path)?,
            None => RainbowBarConfig::default(),
        };
        if let Some(period) = self.period {
            config.wave_emit_period = period;
        }
        if let Some(waves) = self.waves {
            config.visible_waves_count = waves;
        }
        if let Some(palette) = &self.palette {
            config.palette = palette.clone();
        }
        if let Some(background) = self.background {
            config.background_color = background;
        }
        if let Some(notch) = self.notch {
            config.notch = notch.into();
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum NotchArg {
    None,
    Small,
    Big,
}

impl From<NotchArg> for NotchSize {
    fn from(value: NotchArg) -> Self {
        match value {
            NotchArg::None => NotchSize::None,
            NotchArg::Small => NotchSize::Small,
            NotchArg::Big => NotchSize::Big,
        }
    }
}
