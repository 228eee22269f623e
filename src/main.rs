use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use internalize::compressor::{CodecKind, Compressor};
use internalize::config::{RegionMarkers, TransformConfig};
use internalize::core::{
    print_error_message, print_info_message, run_stream, Document, DocumentTransform, Payload,
};
use internalize::diagnostics::{DiagnosticsSink, SilentSink, TracingSink};
use internalize::env::{generate_env_docs, EnvConfig};
use internalize::internalizer::Internalizer;
use internalize::Delimiter;

#[derive(Parser, Debug)]
#[command(
    name = "internalize",
    version,
    about = "Inline CSS, JS, templates and resources into documents, or compress document regions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// TOML configuration file
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Write results into this directory instead of stdout
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    out_dir: Option<PathBuf>,

    /// Suppress per-substitution diagnostics
    #[arg(short, long, global = true)]
    silent: bool,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inline referenced assets into each document
    Inline {
        /// css, js, angular-template, resources or translations
        #[arg(short, long)]
        kind: String,

        /// Prefix for every resolved asset path
        #[arg(long)]
        source_folder: Option<String>,

        /// Extra prefix for CSS url(...) references
        #[arg(long)]
        css_path: Option<String>,

        /// Insertion marker for angular-template and translations
        #[arg(long)]
        delimiter: Option<String>,

        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Replace each document by its compressed regions
    Compress {
        /// Version tag echoed into the payload
        #[arg(long = "version-tag")]
        version: Option<String>,

        /// Region as NAME=START,STOP (repeatable)
        #[arg(long = "region", value_parser = parse_region)]
        regions: Vec<(String, RegionMarkers)>,

        /// JSON object merged into the payload
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        data_file: Option<PathBuf>,

        /// lz-string or deflate
        #[arg(long)]
        codec: Option<CodecKind>,

        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print the environment variables this tool reads
    EnvDocs,
}

fn parse_region(value: &str) -> Result<(String, RegionMarkers), String> {
    let (name, markers) = value
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=START,STOP, got \"{}\"", value))?;
    let (start, stop) = markers
        .split_once(',')
        .ok_or_else(|| format!("expected START,STOP after \"{}=\"", name))?;
    if name.is_empty() || start.is_empty() || stop.is_empty() {
        return Err(format!("empty name or marker in \"{}\"", value));
    }
    Ok((name.to_string(), RegionMarkers::new(start, stop)))
}

fn main() {
    let cli = Cli::parse();

    let env_config = match EnvConfig::from_env() {
        Ok(env_config) => env_config,
        Err(e) => {
            print_error_message(&e.to_string());
            process::exit(1);
        }
    };

    let log_level = if cli.silent {
        "error".to_string()
    } else {
        cli.log_level
            .clone()
            .unwrap_or_else(|| env_config.log_level.clone())
    };
    init_logging(&log_level, env_config.no_color);

    match run(cli, &env_config) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            print_error_message(&format!("Error: {}", e));
            process::exit(1);
        }
    }
}

fn init_logging(level: &str, no_color: bool) {
    let filter = EnvFilter::try_new(format!("internalize={}", level))
        .unwrap_or_else(|_| EnvFilter::new("internalize=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Returns whether every document made it through
fn run(cli: Cli, env_config: &EnvConfig) -> Result<bool, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => TransformConfig::load(path)?,
        None => TransformConfig::default(),
    };
    config = config.merge(env_config.transform_overrides());

    let sink: Arc<dyn DiagnosticsSink> = if cli.silent {
        Arc::new(SilentSink)
    } else {
        Arc::new(TracingSink)
    };

    match cli.command {
        Command::Inline {
            kind,
            source_folder,
            css_path,
            delimiter,
            paths,
        } => {
            let overrides = TransformConfig {
                source_folder: source_folder.unwrap_or_default(),
                css_path: css_path.unwrap_or_default(),
                delimiter: delimiter.map(Delimiter::Marker),
                ..TransformConfig::default()
            };
            let internalizer = Internalizer::new(kind, config.merge(overrides)).with_sink(sink);
            process_paths(&internalizer, &paths, cli.out_dir.as_deref())
        }
        Command::Compress {
            version,
            regions,
            data_file,
            codec,
            paths,
        } => {
            let data = match data_file {
                Some(path) => read_data_file(&path)?,
                None => Map::new(),
            };
            let overrides = TransformConfig {
                delimiters: regions.into_iter().collect(),
                version,
                data,
                codec,
                ..TransformConfig::default()
            };
            let compressor = Compressor::new(config.merge(overrides));
            process_paths(&compressor, &paths, cli.out_dir.as_deref())
        }
        Command::EnvDocs => {
            print_info_message(&generate_env_docs());
            Ok(true)
        }
    }
}

fn read_data_file(path: &Path) -> Result<Map<String, Value>, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    match serde_json::from_str(&contents)? {
        Value::Object(map) => Ok(map),
        _ => Err(format!("{}: data file must hold a JSON object", path.display()).into()),
    }
}

fn load_document(path: &Path) -> io::Result<Document> {
    if path.is_dir() {
        return Ok(Document::directory(path));
    }
    Ok(Document::buffer(path, fs::read(path)?))
}

fn process_paths<T: DocumentTransform>(
    transform: &T,
    paths: &[PathBuf],
    out_dir: Option<&Path>,
) -> Result<bool, Box<dyn Error>> {
    let documents = paths
        .iter()
        .map(|path| load_document(path))
        .collect::<io::Result<Vec<_>>>()?;

    let outcome = run_stream(transform, documents)?;

    for (path, e) in &outcome.rejected {
        print_error_message(&format!("{}: {}", path.display(), e));
    }

    let buffers = outcome.documents.iter().filter_map(|document| match &document.payload {
        Payload::Buffer(contents) => Some((document.path(), contents)),
        _ => None,
    });

    match out_dir {
        Some(out_dir) => {
            let mut targets: Vec<(PathBuf, &Vec<u8>)> = Vec::new();
            for (path, contents) in buffers {
                let name = path
                    .file_name()
                    .ok_or_else(|| format!("{}: no file name", path.display()))?;
                let target = out_dir.join(name);
                if targets.iter().any(|(existing, _)| *existing == target) {
                    return Err(format!(
                        "{}: another input already writes {}",
                        path.display(),
                        target.display()
                    )
                    .into());
                }
                targets.push((target, contents));
            }

            fs::create_dir_all(out_dir)?;
            for (target, contents) in targets {
                fs::write(target, contents)?;
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            for (_, contents) in buffers {
                stdout.write_all(contents)?;
                if contents.last() != Some(&b'\n') {
                    stdout.write_all(b"\n")?;
                }
            }
        }
    }

    Ok(outcome.is_clean())
}
