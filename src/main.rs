use clap::Parser;
use pokeapi_adapter::utils::{logger, validation::Validate};
use pokeapi_adapter::{CliConfig, ConfiguredAdapter, Endpoints, PokeError, Pokemon};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pokeapi-adapter");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Request failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<(), PokeError> {
    let config = cli.resolve()?;
    config.validate()?;

    let adapter = ConfiguredAdapter::from_config(&config)?;
    tracing::info!("Using {} transport", adapter.kind());

    let pokemon = Pokemon::with_parts(
        cli.id,
        cli.name.clone(),
        adapter,
        pokeapi_adapter::TracingAnnouncer,
        Endpoints::from_provider(&config),
    );

    println!("#{} {}", pokemon.id(), pokemon.name());
    println!("🖼  {}", pokemon.image_url());
    pokemon.scream();

    let moves = pokemon.get_moves().await?;
    println!("📜 {} moves", moves.len());
    for mv in &moves {
        match mv.level_learned_at {
            Some(level) => println!("  - {} (level {})", mv.name, level),
            None => println!("  - {}", mv.name),
        }
    }

    Ok(())
}
