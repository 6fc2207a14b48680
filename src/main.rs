use std::fs::{self, File, OpenOptions};
use std::io;
use std::process;

use clap::{ArgAction, Parser};
use env_logger::{Builder, Env, Target};
use log::warn;

use speedread::app;
use speedread::config::{Config, ScaleReference};

const LOG_ENV: &str = "SPEEDREAD_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "speedread",
    version,
    about = "Terminal RSVP speed reader with block-glyph word display"
)]
struct Cli {
    #[arg(short, long, help = "Words per minute (10-1000)")]
    wpm: Option<u32>,

    #[arg(
        short,
        long = "punct-pause",
        value_name = "MS",
        help = "Extra pause after commas, semicolons and quotes, in milliseconds"
    )]
    punct_pause: Option<u64>,

    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = true,
        value_name = "BOOL",
        help = "Highlight the focal letter (--focal=false to turn off)"
    )]
    focal: Option<bool>,

    #[arg(short = 'c', long = "focal-color", help = "Focal letter color")]
    focal_color: Option<String>,

    #[arg(long, help = "Show the previous and next words dimmed")]
    context: bool,

    #[arg(long = "scale-reference", value_enum, help = "Word the glyph scale is sized against")]
    scale_reference: Option<ScaleReference>,

    #[arg(long = "no-resume", help = "Start from the beginning without asking")]
    no_resume: bool,

    #[arg(help = "File path or http(s) URL; reads stdin when omitted")]
    input: Option<String>,
}

impl Cli {
    /// Command-line values win over the config file.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(wpm) = self.wpm {
            config.wpm = wpm;
        }
        if let Some(ms) = self.punct_pause {
            config.punct_pause_ms = ms;
        }
        if let Some(focal) = self.focal {
            config.focal = focal;
        }
        if let Some(color) = &self.focal_color {
            config.focal_color = color.clone();
        }
        if self.context {
            config.context = true;
        }
        if let Some(reference) = self.scale_reference {
            config.scale_reference = reference;
        }
        config.validate();
        config
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = Config::load().unwrap_or_else(|err| {
        warn!("ignoring config file: {err:#}");
        eprintln!("Warning: ignoring config file: {err:#}");
        Config::default()
    });
    let config = cli.apply(config);

    if let Err(err) = app::run(&config, cli.input.as_deref(), !cli.no_resume) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

/// Logging is off unless `SPEEDREAD_LOG` is set. Records go to a file in the
/// cache dir since the terminal belongs to the reader.
fn init_logging() {
    let mut builder = Builder::from_env(Env::new().filter_or(LOG_ENV, "off"));
    match std::env::var_os(LOG_ENV).and_then(|_| open_log_file()) {
        Some(file) => builder.target(Target::Pipe(Box::new(file))),
        None => builder.target(Target::Pipe(Box::new(io::sink()))),
    };
    builder.init();
}

fn open_log_file() -> Option<File> {
    let dir = dirs::cache_dir()?.join("speedread");
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("speedread.log"))
        .ok()
}
