mod cli;

use convertforge::batch::{
    add_files, remove_file, BatchRequest, BatchRunner, ErrorLog, FileOutcome,
    FileProgress, InputFileSet, OutputPolicy,
};
use convertforge::{config, formats};
use convertforge_av::{check_tools, Capabilities, MediaBackend};
use convertforge_common::MediaKind;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

struct ConvertArgs {
    kind: MediaKind,
    to: String,
    from: Option<String>,
    output: Option<PathBuf>,
    subfolder: Option<String>,
    exclude: Vec<PathBuf>,
    json: bool,
    files: Vec<PathBuf>,
}

fn absolute(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn print_progress(progress: &FileProgress<'_>, to_stderr: bool) {
    let line = match progress.outcome {
        FileOutcome::Converted { .. } => format!(
            "Converting {}/{}: {}",
            progress.index, progress.total, progress.file_name
        ),
        FileOutcome::Failed { reason } => format!(
            "Converting {}/{}: {} (error: {})",
            progress.index,
            progress.total,
            progress.file_name,
            reason.lines().next().unwrap_or("").trim()
        ),
    };
    if to_stderr {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

fn convert(args: ConvertArgs, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    formats::validate_tables()?;

    let kind = args.kind;
    let cap = config.limits.max_files;

    // Selection: filter by source format, then add under the cap.
    let mut candidates: Vec<PathBuf> = args.files.iter().map(absolute).collect();
    let before = candidates.len();
    let wanted = match &args.from {
        Some(label) => {
            let filter = formats::lookup_source(kind, label)
                .with_context(|| format!("Unknown {} source format: {}", kind, label))?;
            candidates.retain(|path| filter.accepts(path));
            filter.label.to_string()
        }
        None => {
            candidates.retain(|path| formats::accepts_kind(kind, path));
            kind.to_string()
        }
    };
    if candidates.is_empty() {
        anyhow::bail!("No valid {} files selected!", wanted);
    }
    if candidates.len() < before {
        eprintln!(
            "Skipped {} file(s) that are not {} files",
            before - candidates.len(),
            wanted
        );
    }

    let added = add_files(&InputFileSet::new(cap), candidates, cap);
    if added.truncated {
        eprintln!(
            "Maximum {} files allowed. Only the first {} will be processed.",
            cap, cap
        );
    }
    let mut files = added.files;
    for path in &args.exclude {
        files = remove_file(&files, &absolute(path));
    }

    let base = args
        .output
        .or_else(|| config.output.directory.clone())
        .map(|dir| absolute(&dir));
    let subfolder = args.subfolder.or_else(|| {
        config
            .output
            .create_subfolder
            .then(|| config.output.subfolder_name.clone().unwrap_or_default())
    });
    let policy = OutputPolicy { base, subfolder };

    let backend = MediaBackend::new(Capabilities::detect(
        config.tools.ffmpeg.as_deref(),
        config.tools.heif_enc.as_deref(),
    ));

    let request = BatchRequest {
        kind,
        files: &files,
        target: Some(args.to.as_str()),
        output: &policy,
    };
    let json = args.json;
    let mut runner = BatchRunner::new(&backend).with_progress_callback(Box::new(
        move |progress: &FileProgress<'_>| print_progress(progress, json),
    ));
    if kind == MediaKind::Video && config.logging.enabled {
        runner = runner.with_error_log(ErrorLog::new(&config.logging.error_log));
    }
    let report = runner.run(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        print!("{}", report.summary(kind.noun()));
    }

    Ok(())
}

fn list_formats(kind: Option<MediaKind>, json: bool) -> Result<()> {
    let kinds: Vec<MediaKind> = match kind {
        Some(kind) => vec![kind],
        None => MediaKind::ALL.to_vec(),
    };

    if json {
        let listing: Vec<serde_json::Value> = kinds
            .iter()
            .map(|&kind| {
                serde_json::json!({
                    "kind": kind,
                    "targets": formats::targets(kind)
                        .iter()
                        .map(|e| serde_json::json!({ "label": e.label, "extension": e.target.extension() }))
                        .collect::<Vec<_>>(),
                    "sources": formats::sources(kind)
                        .iter()
                        .map(|f| serde_json::json!({ "label": f.label, "extensions": f.extensions }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for kind in kinds {
        let targets: Vec<&str> = formats::targets(kind).iter().map(|e| e.label).collect();
        let sources: Vec<&str> = formats::sources(kind).iter().map(|f| f.label).collect();
        println!("{}:", kind);
        println!("  Targets: {}", targets.join(", "));
        println!("  Sources: {}", sources.join(", "));
    }
    Ok(())
}

fn check_external_tools(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    println!("Checking external tools...\n");

    let tools = check_tools();
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else if tool.optional {
            "-"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version.lines().next().unwrap_or(""));
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        if tool.optional && !tool.available {
            print!(" (optional; HEIC/HEIF will be written as PNG)");
        }

        println!();
    }

    let backend = MediaBackend::new(Capabilities::detect(
        config.tools.ffmpeg.as_deref(),
        config.tools.heif_enc.as_deref(),
    ));
    let caps = backend.capabilities();
    println!();
    match &caps.ffmpeg {
        Some(path) => println!("Conversions will use ffmpeg at {}", path.display()),
        None => all_ok = false,
    }
    if !caps.has_heif_encoder() {
        println!("HEIC/HEIF targets will be written as PNG");
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Audio and video conversion need ffmpeg.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::Config::default()
        }
    };

    println!("  Max files per batch: {}", config.limits.max_files);
    match &config.output.directory {
        Some(dir) => println!("  Output directory: {}", dir.display()),
        None => println!("  Output directory: (from -o)"),
    }
    if config.output.create_subfolder {
        println!(
            "  Subfolder: {}",
            config
                .output
                .subfolder_name
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or("(default per media kind)")
        );
    }
    if config.logging.enabled {
        println!("  Error log: {}", config.logging.error_log.display());
    } else {
        println!("  Error log: disabled");
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "convertforge=debug,convertforge_av=debug".to_string()
        } else {
            "convertforge=warn,convertforge_av=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert {
            kind,
            to,
            from,
            output,
            subfolder,
            exclude,
            json,
            files,
        } => convert(
            ConvertArgs {
                kind,
                to,
                from,
                output,
                subfolder,
                exclude,
                json,
                files,
            },
            cli.config.as_deref(),
        ),
        Commands::Formats { kind, json } => list_formats(kind, json),
        Commands::CheckTools => check_external_tools(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("convertforge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
