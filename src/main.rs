use clap::Parser;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

use reframe::core::config::{self, parse_level_filter};
use reframe::core::state::App;
use reframe::core::thought::ThoughtRecord;

#[derive(Parser)]
#[command(name = "reframe", about = "Fill in a CBT thought record from the terminal")]
struct Args {
    /// Pre-fill the automatic thought
    #[arg(value_name = "THOUGHT")]
    automatic_thought: Option<String>,

    /// Config file (defaults to ~/.reframe/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_level_filter)]
    log_level: Option<LevelFilter>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("reframe: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&loaded.config, args.log_level);

    // File logger: the terminal belongs to the editor
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&resolved.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
        Err(e) => eprintln!(
            "reframe: cannot open log file {}: {e}",
            resolved.log_file.display()
        ),
    }

    // Config was read before the logger existed
    for note in loaded.notes.iter().chain(&resolved.notes) {
        note.log();
    }

    log::info!(
        "Reframe starting up with {} distortion categories",
        resolved.distortions.len()
    );

    let mut thought = ThoughtRecord::new(resolved.distortions);
    if let Some(text) = args.automatic_thought {
        thought.automatic_thought = text;
    }

    let app = reframe::tui::run(App::new(thought))?;

    if let Some(saved) = app.saved {
        let json = serde_json::to_string_pretty(&saved).map_err(io::Error::other)?;
        println!("{json}");
    } else {
        log::info!("Exiting without a saved record");
    }

    Ok(())
}
