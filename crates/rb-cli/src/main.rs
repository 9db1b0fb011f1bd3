//! rbundle - inspect, query and convert localized resource bundles.
//!
//! Works on ZIP archives (`meta.properties` plus one
//! `<language>_<locale>.properties` entry per bundle) and on the single
//! JSON interchange document.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rb_bundle::{languages, Bundle, ResourceBundle};
use rb_cli::config::{parse_pair, TargetResolver};
use rb_cli::input::{bundle_from_file, load_container};
use rb_cli::{init_logging, ExitCode, LogConfig, LogFormat, LogLevel};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// Localized resource bundle tool
#[derive(Parser)]
#[command(name = "rbundle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Output format for command payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Structured JSON
    #[default]
    Json,
    /// Plain text
    Text,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Target language code for lookups (overrides RBUNDLE_LANG)
    #[arg(long = "lang", global = true)]
    language: Option<String>,

    /// Target locale code for lookups (overrides RBUNDLE_LOCALE)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log format on stderr: human or jsonl (overrides RBUNDLE_LOG_FORMAT)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported language catalog
    Languages,

    /// Summarize the bundles of an archive or document
    Inspect(InspectArgs),

    /// Resolve a text with locale → language → default fallback
    Get(GetArgs),

    /// Convert an archive into a JSON document
    ToJson(ToJsonArgs),

    /// Convert a JSON document into an archive
    FromJson(FromJsonArgs),

    /// Build an archive from <language>_<locale>.properties files
    Pack(PackArgs),
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Archive or .json document
    input: PathBuf,
}

#[derive(Args, Debug)]
struct GetArgs {
    /// Archive or .json document
    input: PathBuf,

    /// Text key
    key: String,
}

#[derive(Args, Debug)]
struct ToJsonArgs {
    /// Archive to convert
    input: PathBuf,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Indent the document
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct FromJsonArgs {
    /// JSON document to convert
    input: PathBuf,

    /// Archive to write
    #[arg(long, short = 'o')]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct PackArgs {
    /// Properties files named <language>_<locale>.<ext>
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Default bundle as <language>_<locale>
    #[arg(long = "default")]
    default_pair: String,

    /// Archive to write
    #[arg(long, short = 'o')]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.global.quiet {
        LogLevel::Error
    } else {
        match cli.global.verbose {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    };
    let cli_level = (cli.global.quiet || cli.global.verbose > 0).then_some(log_level);
    let log_config = LogConfig::from_env(cli_level, cli.global.log_format);
    init_logging(&log_config);

    let exit_code = match &cli.command {
        Commands::Languages => run_languages(&cli.global),
        Commands::Inspect(args) => run_inspect(&cli.global, args),
        Commands::Get(args) => run_get(&cli.global, args),
        Commands::ToJson(args) => run_to_json(&cli.global, args),
        Commands::FromJson(args) => run_from_json(&cli.global, args),
        Commands::Pack(args) => run_pack(&cli.global, args),
    };

    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Command implementations
// ============================================================================

fn run_languages(global: &GlobalOpts) -> ExitCode {
    match global.format {
        OutputFormat::Json => print_json(&json!({ "languages": languages() })),
        OutputFormat::Text => {
            for language in languages() {
                println!(
                    "{}_{}\t{}",
                    language.language_code, language.locale_code, language.name
                );
            }
            ExitCode::Clean
        }
    }
}

fn run_inspect(global: &GlobalOpts, args: &InspectArgs) -> ExitCode {
    let rb = match load_container(&args.input) {
        Ok(rb) => rb,
        Err(e) => return fail(global, &args.input, e),
    };
    let rb = apply_target(global, rb);

    let default = rb.default_bundle().map(pair_name);
    let target = rb.target_bundle().map(pair_name);

    match global.format {
        OutputFormat::Json => {
            let bundles: Vec<_> = rb
                .bundles()
                .iter()
                .map(|b| {
                    json!({
                        "languageCode": b.language_code,
                        "localeCode": b.locale_code,
                        "keys": b.len(),
                    })
                })
                .collect();
            print_json(&json!({
                "input": args.input.display().to_string(),
                "bundles": bundles,
                "default": default,
                "defaultShared": rb.default_is_shared(),
                "target": {
                    "languageCode": rb.language_code(),
                    "localeCode": rb.locale_code(),
                    "resolvesTo": target,
                },
            }))
        }
        OutputFormat::Text => {
            for b in rb.bundles() {
                let name = pair_name(b);
                let marker = if default.as_deref() == Some(name.as_str()) {
                    " (default)"
                } else {
                    ""
                };
                println!("{}\t{} keys{}", name, b.len(), marker);
            }
            ExitCode::Clean
        }
    }
}

fn run_get(global: &GlobalOpts, args: &GetArgs) -> ExitCode {
    let rb = match load_container(&args.input) {
        Ok(rb) => rb,
        Err(e) => return fail(global, &args.input, e),
    };
    let rb = apply_target(global, rb);
    let text = rb.get(&args.key);

    match global.format {
        OutputFormat::Json => print_json(&json!({
            "key": args.key,
            "text": text,
            "found": !text.is_empty(),
            "languageCode": rb.language_code(),
            "localeCode": rb.locale_code(),
        })),
        OutputFormat::Text => {
            println!("{}", text);
            ExitCode::Clean
        }
    }
}

fn run_to_json(global: &GlobalOpts, args: &ToJsonArgs) -> ExitCode {
    let rb = match ResourceBundle::open_archive("", "", &args.input) {
        Ok(rb) => rb,
        Err(e) => return fail(global, &args.input, e),
    };
    let rb = apply_target(global, rb);

    let document = if args.pretty {
        rb.to_json_pretty().map(String::into_bytes)
    } else {
        rb.to_json()
    };
    let document = match document {
        Ok(document) => document,
        Err(e) => return fail(global, &args.input, e),
    };

    match &args.output {
        Some(path) => match std::fs::write(path, &document) {
            Ok(()) => {
                info!(path = %path.display(), bundles = rb.len(), "Document written");
                ExitCode::Clean
            }
            Err(e) => fail(global, path, e.into()),
        },
        None => {
            println!("{}", String::from_utf8_lossy(&document));
            ExitCode::Clean
        }
    }
}

fn run_from_json(global: &GlobalOpts, args: &FromJsonArgs) -> ExitCode {
    let rb = match std::fs::read(&args.input)
        .map_err(rb_bundle::Error::from)
        .and_then(|data| ResourceBundle::from_json(&data))
    {
        Ok(rb) => rb,
        Err(e) => return fail(global, &args.input, e),
    };

    match rb.write_archive(&args.output) {
        Ok(()) => report_written(global, &args.output, rb.len()),
        Err(e) => fail(global, &args.output, e),
    }
}

fn run_pack(global: &GlobalOpts, args: &PackArgs) -> ExitCode {
    let (default_language, default_locale) = match parse_pair(&args.default_pair) {
        Ok(pair) => pair,
        Err(message) => {
            emit_error(global, ExitCode::ArgsError, &message);
            return ExitCode::ArgsError;
        }
    };

    let mut rb = ResourceBundle::empty(default_language.as_str(), default_locale.as_str());
    for path in &args.files {
        let bundle = match bundle_from_file(path) {
            Ok(bundle) => bundle,
            Err(e) => return fail(global, path, e),
        };
        if let Err(e) = rb.add_bundle(bundle, false) {
            return fail(global, path, e);
        }
    }
    if let Err(e) = rb.set_default(&default_language, &default_locale) {
        return fail(global, Path::new(&args.default_pair), e);
    }

    match rb.write_archive(&args.output) {
        Ok(()) => report_written(global, &args.output, rb.len()),
        Err(e) => fail(global, &args.output, e),
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Point the container at the resolved target.
fn apply_target(global: &GlobalOpts, mut rb: ResourceBundle) -> ResourceBundle {
    let own_target = (!rb.language_code().is_empty())
        .then(|| (rb.language_code().to_string(), rb.locale_code().to_string()));
    let fallback = own_target.or_else(|| {
        rb.default_bundle()
            .map(|b| (b.language_code.clone(), b.locale_code.clone()))
    });

    let resolver = TargetResolver::new(global.language.clone(), global.locale.clone());
    let target = resolver.resolve(fallback.as_ref().map(|(l, r)| (l.as_str(), r.as_str())));
    tracing::debug!(
        language = %target.language_code,
        locale = %target.locale_code,
        language_source = %target.language_source,
        locale_source = %target.locale_source,
        "Resolved lookup target"
    );
    rb.set_target(target.language_code, target.locale_code);
    rb
}

fn pair_name(bundle: &Bundle) -> String {
    format!("{}_{}", bundle.language_code, bundle.locale_code)
}

fn report_written(global: &GlobalOpts, path: &Path, bundles: usize) -> ExitCode {
    match global.format {
        OutputFormat::Json => print_json(&json!({
            "written": path.display().to_string(),
            "bundles": bundles,
        })),
        OutputFormat::Text => {
            println!("wrote {} bundles to {}", bundles, path.display());
            ExitCode::Clean
        }
    }
}

fn print_json(value: &serde_json::Value) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::Clean
        }
        Err(e) => {
            eprintln!("error: failed to render output: {}", e);
            ExitCode::InternalError
        }
    }
}

fn fail(global: &GlobalOpts, path: &Path, err: rb_bundle::Error) -> ExitCode {
    let code = ExitCode::from(&err);
    emit_error(global, code, &format!("{}: {}", path.display(), err));
    code
}

fn emit_error(global: &GlobalOpts, code: ExitCode, message: &str) {
    match global.format {
        OutputFormat::Json => eprintln!(
            "{}",
            json!({ "error": message, "code": code.code_name(), "exit_code": code.as_i32() })
        ),
        OutputFormat::Text => eprintln!("error: {}", message),
    }
}
