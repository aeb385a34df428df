use anyhow::Context;
use book_sponsorship::utils::{logger, validation::Validate};
use book_sponsorship::{
    BooksellerClient, CiviCrmClient, Cli, DedupeClient, Edition, HoldingsClient, InactiveProgram,
    SponsorConfig, SponsorshipPipeline,
};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting book-sponsorship CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => SponsorConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SponsorConfig::default(),
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // CRM listing mode
    if let Some(username) = &cli.sponsored_by {
        let crm = CiviCrmClient::new(&config.civicrm);
        let records = crm
            .sponsored_editions(username)
            .await
            .with_context(|| format!("failed to fetch sponsorships for {}", username))?;
        tracing::info!("Found {} sponsorship record(s)", records.len());
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    // Default mode: qualify one edition
    let Some(edition_path) = &cli.edition else {
        eprintln!("❌ Pass --edition <FILE> to qualify a book, or --sponsored-by <USERNAME>");
        std::process::exit(1);
    };
    let raw = std::fs::read_to_string(edition_path)
        .with_context(|| format!("failed to read {}", edition_path.display()))?;
    let edition: Edition = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid edition record", edition_path.display()))?;

    let pipeline = SponsorshipPipeline::new(
        HoldingsClient::new(&config.services),
        DedupeClient::new(&config.services),
        BooksellerClient::new(&config.services),
        // no operator rule wired into the CLI build; see SponsorshipPolicy
        InactiveProgram,
        config,
    );

    let verdict = pipeline.qualify(&edition).await;
    if verdict.is_eligible {
        tracing::info!("✅ Edition qualifies for sponsorship");
    } else {
        tracing::info!("Edition does not qualify for sponsorship");
    }
    println!("{}", serde_json::to_string_pretty(&verdict)?);

    Ok(())
}
