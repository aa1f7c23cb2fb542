use anyhow::Context;
use clap::Parser;
use record_renderer::utils::{logger, validation::Validate};
use record_renderer::{CliConfig, RecordRenderer, RenderError, Script};

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let script = match &config.script {
        Some(path) => Script::from_file(path)
            .with_context(|| format!("failed to load script {}", path))?,
        None => Script::builtin(),
    };

    let stdout = std::io::stdout();
    let mut renderer = RecordRenderer::new(stdout.lock());
    renderer
        .run(&script)
        .with_context(|| format!("failed to render script '{}'", script.script.name))?;

    tracing::debug!("Rendered {} steps", script.steps.len());
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!("Render failed: {:#}", e);
        eprintln!("❌ {:#}", e);
        if let Some(cause) = e.downcast_ref::<RenderError>() {
            eprintln!("💡 {}", cause.recovery_suggestion());
        }
        std::process::exit(1);
    }
}
