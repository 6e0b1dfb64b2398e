// Inputsense Replay CLI
// Replays a recorded event script and prints each classification

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use inputsense_core::{
    load_script, Dispatch, EngineConfig, Interaction, InteractionEngine, PointerType, RawEvent,
    RecordingSurface, Settings,
};

/// Input-modality classifier replay tool
#[derive(Parser, Debug)]
#[command(name = "inputsense")]
#[command(author = "inputsense contributors")]
#[command(version)]
#[command(about = "Replay raw input events through the modality classifier", long_about = None)]
struct Args {
    /// Event script to replay (one event per line)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// TOML settings file (defaults to ~/.config/inputsense/settings.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the initial pointer type
    #[arg(short, long, value_name = "TYPE")]
    initial: Option<PointerType>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Validate settings and exit
    #[arg(long)]
    check_config: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_settings(args: &Args) -> Result<Settings> {
    match &args.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Settings::load_default().context("failed to load default settings"),
    }
}

fn resolve_config(args: &Args, settings: Settings) -> EngineConfig {
    let mut config = settings.into_engine_config();
    if let Some(initial) = args.initial {
        config.initial_pointer_type = initial;
    }
    if args.verbose && config.diagnostics.to_level().is_none() {
        config.diagnostics = inputsense_core::DiagnosticLevel::Debug;
    }
    config
}

fn describe_event(event: &RawEvent) -> String {
    match event {
        RawEvent::KeyDown(key) => match key.navigation_key() {
            Some(nav) => format!(
                "keydown {} on {}",
                nav,
                key.target_tag().unwrap_or("<no target>")
            ),
            None => format!(
                "keydown {}",
                key.code()
                    .map_or_else(|| "<no code>".to_string(), |code| code.to_string())
            ),
        },
        RawEvent::PointerDown(pointer) => format!(
            "pointerdown height={} type={}",
            pointer
                .height
                .map_or_else(|| "<missing>".to_string(), |h| h.to_string()),
            pointer.pointer_type.as_deref().unwrap_or("<none>")
        ),
        other => other.kind().to_string(),
    }
}

fn describe_interaction(interaction: &Interaction) -> String {
    let history: Vec<&'static str> = interaction.history.iter().map(|t| (*t).into()).collect();
    format!(
        "pointer={} history=[{}] accuracy={} canHover={}",
        interaction.pointer_type,
        history.join(", "),
        interaction
            .accuracy
            .map_or_else(|| "none".to_string(), |a| format!("{:.1}", a)),
        interaction.can_hover
    )
}

fn replay(script: &Path, config: EngineConfig) -> Result<()> {
    let events = load_script(script)
        .with_context(|| format!("failed to read script {}", script.display()))?;

    let mut engine = InteractionEngine::attach(RecordingSurface::new(), config);
    println!("{:>4}  start  {}", 0, describe_interaction(&engine.interaction()));

    for (index, event) in events.into_iter().enumerate() {
        let label = describe_event(&event);
        let outcome = match engine.dispatch(event) {
            Dispatch::Detached(kind) => format!("dropped ({} listener detached)", kind),
            Dispatch::Classified {
                classification,
                interaction,
            } => format!("{:?}  {}", classification, describe_interaction(&interaction)),
        };
        println!("{:>4}  {}  ->  {}", index + 1, label, outcome);
        println!("      listeners={}", engine.listeners());
    }

    engine.detach();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = load_settings(&args)?;

    if args.check_config {
        let config = resolve_config(&args, settings);
        println!("Configuration is valid: {:?}", config);
        return Ok(());
    }

    let script = args
        .script
        .clone()
        .context("SCRIPT is required unless --check-config is given")?;

    let config = resolve_config(&args, settings);
    log::debug!("replaying {} with {:?}", script.display(), config);
    replay(&script, config)
}
