use anyhow::{Context, Result};
use flat2sql::{process, Config};
use std::{env, fs, path::PathBuf, time::Instant};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Usage: flat2sql [DATA_DIR] [-c CONFIG.yaml] [-o OUT.sql]
///
/// DATA_DIR overrides the config's base directory; without `-o` the insert
/// script goes to stdout.
fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) parse args ───────────────────────────────────────────────
    let mut base_dir: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut out_path: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                let path = args.next().context("-c needs a config file path")?;
                config_path = Some(PathBuf::from(path));
            }
            "-o" | "--output" => {
                let path = args.next().context("-o needs an output file path")?;
                out_path = Some(PathBuf::from(path));
            }
            _ => base_dir = Some(PathBuf::from(arg)),
        }
    }

    let mut config = match &config_path {
        Some(path) => Config::from_yaml_file(path)?,
        None => Config::default(),
    };
    if let Some(dir) = base_dir {
        config.base_dir = dir;
    }
    info!(base_dir = %config.base_dir.display(), "generating inserts");

    // ─── 3) run the pipeline ─────────────────────────────────────────
    let start = Instant::now();
    let inserts = process::generate_inserts_parallel(&config)?;
    info!(inserts = inserts.len(), elapsed = ?start.elapsed(), "generation finished");

    // ─── 4) write the script ─────────────────────────────────────────
    match out_path {
        Some(path) => {
            let mut text = inserts.join("\n");
            if !text.is_empty() {
                text.push('\n');
            }
            fs::write(&path, text)
                .with_context(|| format!("writing insert script {}", path.display()))?;
            info!(path = %path.display(), "wrote insert script");
        }
        None => {
            for stmt in &inserts {
                println!("{stmt}");
            }
        }
    }

    Ok(())
}
