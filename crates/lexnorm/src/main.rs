use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use env_flags::env_flags;
use once_cell::sync::OnceCell;

use lexnorm::config::UserConfig;
use lexnorm::credentials::{SharedCredentials, default_credentials_path, default_profile_name};

#[derive(Parser, Debug)]
#[command(name = "lexnorm", version, about = "Normalize API identifiers and read INI profile files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canonical snake_case form of each identifier
    Underscore {
        #[arg(required = true)]
        identifiers: Vec<String>,
    },
    /// Parse an INI file and print it as JSON
    Ini {
        file: PathBuf,
        /// Only print this section
        #[arg(long)]
        section: Option<String>,
    },
    /// Resolve a profile from a shared credentials file
    Credentials {
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        profile: Option<String>,
    },
}

fn lexnorm_home() -> PathBuf {
    env_flags! {
        /// Lexnorm home directory (absolute). Defaults to $HOME/.lexnorm
        LEXNORM_HOME: &str = "";
    }
    if !(*LEXNORM_HOME).is_empty() {
        PathBuf::from((*LEXNORM_HOME).to_string())
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".lexnorm")
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".lexnorm")
    }
}

fn init_tracing(home: &std::path::Path, user_cfg: Option<&UserConfig>) {
    env_flags! {
        /// Tracing filter, e.g. "info", "debug", or targets format.
        RUST_LOG: &str = "warn";
        /// Preferred filter env (alias). If set, overrides RUST_LOG.
        TRACING_FILTER: &str = "";
        /// JSON formatting for logs
        TRACING_JSON: bool = false;
        /// If true, also log to file under <LEXNORM_HOME>/logs or LOG_DIR
        LOG_TO_FILE: bool = false;
        /// Optional explicit log directory (absolute). Defaults to <LEXNORM_HOME>/logs
        LOG_DIR: &str = "";
    }

    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, prelude::*};

    let env_set = |k: &str| std::env::var_os(k).is_some();

    // TRACING_FILTER first, then RUST_LOG, then the config file.
    let mut filter_spec = if !(*TRACING_FILTER).is_empty() {
        (*TRACING_FILTER).to_string()
    } else {
        (*RUST_LOG).to_string()
    };
    let mut json = *TRACING_JSON;
    let mut to_file = *LOG_TO_FILE;
    let mut log_dir: Option<PathBuf> = if !(*LOG_DIR).is_empty() {
        Some(PathBuf::from((*LOG_DIR).to_string()))
    } else {
        None
    };

    if let Some(user_cfg) = user_cfg {
        let cfg = &user_cfg.logging;
        if !(env_set("TRACING_FILTER") || env_set("RUST_LOG"))
            && let Some(level) = cfg.level.as_ref()
        {
            filter_spec = level.clone();
        }
        if !env_set("TRACING_JSON")
            && let Some(v) = cfg.json
        {
            json = v;
        }
        if !env_set("LOG_TO_FILE")
            && let Some(v) = cfg.to_file
        {
            to_file = v;
        }
        if !env_set("LOG_DIR")
            && let Some(dir) = user_cfg.log_dir()
        {
            log_dir = Some(dir);
        }
    }

    let filter = EnvFilter::try_new(filter_spec).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries command output; logs go to stderr.
    let base = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_writer(std::io::stderr);

    static FILE_GUARD: OnceCell<tracing_appender::non_blocking::WorkerGuard> = OnceCell::new();
    let mut dir_error = None;
    let file_writer = if to_file {
        let dir = log_dir.unwrap_or_else(|| home.join("logs"));
        match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, "lexnorm.log");
                let (nb, guard) = tracing_appender::non_blocking(appender);
                let _ = FILE_GUARD.set(guard);
                Some(nb)
            }
            Err(e) => {
                dir_error = Some((dir, e));
                None
            }
        }
    } else {
        None
    };

    let reg = tracing_subscriber::registry().with(filter);
    let result = if json {
        let file_layer = file_writer.map(|nb| {
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(nb)
                .json()
        });
        reg.with(base.json()).with(file_layer).try_init()
    } else {
        let file_layer = file_writer.map(|nb| {
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(nb)
                .compact()
        });
        reg.with(base.compact()).with(file_layer).try_init()
    };
    if let Err(e) = result {
        tracing::debug!("tracing already set: {:?}", e);
    }
    if let Some((dir, e)) = dir_error {
        tracing::warn!("failed to create log dir {}: {}", dir.display(), e);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let home = lexnorm_home();
    let loaded = UserConfig::load(&home);
    let user_cfg = loaded.as_ref().ok().and_then(Option::as_ref);
    init_tracing(&home, user_cfg);
    if let Err(e) = &loaded {
        tracing::warn!("ignoring unreadable config: {}", e);
    }

    match cli.command {
        Command::Underscore { identifiers } => {
            let converter = match user_cfg {
                Some(cfg) => cfg.converter().context("loading naming overrides")?,
                None => lexnorm::CaseConverter::new(),
            };
            tracing::debug!("{} extra naming overrides", converter.extra_len());
            for ident in identifiers {
                println!("{}", converter.convert(&ident));
            }
        }
        Command::Ini { file, section } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let doc = lexnorm::parse(&text);
            let out = match section {
                Some(name) => {
                    let pairs = doc
                        .section(&name)
                        .with_context(|| format!("no section '{}' in {}", name, file.display()))?;
                    serde_json::to_string_pretty(pairs)?
                }
                None => serde_json::to_string_pretty(&doc)?,
            };
            println!("{out}");
        }
        Command::Credentials { file, profile } => {
            let file = file.unwrap_or_else(default_credentials_path);
            let profile = profile.unwrap_or_else(default_profile_name);
            let creds = SharedCredentials::load(&file, &profile)?;
            println!("profile: {profile}");
            println!("aws_access_key_id: {}", creds.access_key_id);
            println!("session_token: {}", creds.session_token.is_some());
        }
    }

    Ok(())
}
