use clap::Parser;
use shippy::config::ShippingConfig;
use shippy::input::load_consignment;
use shippy::lifecycle::{setup_tracing, ShippingSystem};
use shippy::service::ConsignmentService;
use std::path::PathBuf;
use tracing::{error, info, Instrument};

#[derive(Parser)]
#[command(name = "shippy")]
#[command(about = "Create a consignment and list everything stored")]
struct Args {
    /// Path to the consignment description (JSON)
    #[arg(default_value = "consignment.json")]
    file: PathBuf,

    /// Path to a TOML configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    setup_tracing();

    let config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            ShippingConfig::from_file(path).map_err(|e| e.to_string())?
        }
        None => ShippingConfig::default(),
    };

    let consignment = load_consignment(&args.file).map_err(|e| e.to_string())?;
    info!(file = %args.file.display(), "Consignment description loaded");

    let system = ShippingSystem::start(&config)
        .await
        .map_err(|e| e.to_string())?;

    let service = system
        .registry
        .resolve::<ConsignmentService>(&config.consignment_service)
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("consignment_processing");
    let submitted = async { service.submit(consignment).await }
        .instrument(span)
        .await;

    let (created, listing) = match submitted {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "Could not create consignment");
            drop(service);
            system.shutdown().await?;
            return Err(e.to_string());
        }
    };
    info!(
        created = created.created,
        id = %created.consignment.id,
        vessel_id = created.consignment.vessel_id.as_deref().unwrap_or_default(),
        "Consignment accepted"
    );
    for consignment in &listing.consignments {
        info!(
            id = %consignment.id,
            weight = consignment.weight,
            containers = consignment.containers.len(),
            vessel_id = consignment.vessel_id.as_deref().unwrap_or_default(),
            "Stored consignment"
        );
    }

    drop(service);
    system.shutdown().await?;

    info!("Done");
    Ok(())
}
