extern crate rust_raymarcher as root;

use root::parsing::{construct_camera, construct_scene, get_settings};
use root::renderer::{output_film, render};

use std::fs::File;

use anyhow::{Context, Result};
use log::{info, LevelFilter};
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config: String,
    /// worker count; <= 1 renders sequentially
    #[structopt(short = "t", long)]
    pub threads: Option<i32>,
    /// overrides the filename from the config file
    #[structopt(short = "o", long)]
    pub output: Option<String>,
    /// parse and validate everything, skip the render
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "warn")]
    pub print_log_level: String,
    #[structopt(long, default_value = "info")]
    pub write_log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => default,
    }
}

fn main() -> Result<()> {
    let opts = Opt::from_args();
    let term_log_level = parse_log_level(&opts.print_log_level, LevelFilter::Warn);
    let write_log_level = parse_log_level(&opts.write_log_level, LevelFilter::Info);

    CombinedLogger::init(vec![
        TermLogger::new(
            term_log_level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            write_log_level,
            simplelog::Config::default(),
            File::create("main.log").context("couldn't create log file")?,
        ),
    ])?;

    let mut settings = get_settings(&opts.config)?;
    if let Some(threads) = opts.threads {
        settings.threads = Some(threads);
    }

    let scene = construct_scene(&settings)?;
    let camera = construct_camera(&settings)?;
    info!(
        "loaded {} with {} object(s)",
        opts.config,
        scene.objects().len()
    );

    if opts.dry_run {
        return Ok(());
    }

    let film = render(
        &scene,
        &camera,
        settings.scan.into(),
        settings.threads.unwrap_or(1),
    );

    let filename = opts
        .output
        .or(settings.filename)
        .unwrap_or_else(|| String::from("render.png"));
    output_film(&film, &filename)?;

    Ok(())
}
