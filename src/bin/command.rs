use anyhow::{Context, Result};
use healthimaging_import_trigger::event::ObjectLocation;
use healthimaging_import_trigger::job::ImportJobRequest;
use healthimaging_import_trigger::{app, client, client::JobSubmitter};
use std::env::var;
use tracing::info;

/// Start a single import job for the object given by the `BUCKET` and
/// `KEY` environment variables.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
    app::init()?;
    client::init().await?;

    let location = ObjectLocation {
        bucket: var("BUCKET").context("BUCKET is required")?,
        key: var("KEY").context("KEY is required")?,
    };
    let client_token = var("CLIENT_TOKEN").ok();
    let request = ImportJobRequest::new(
        &app::current().settings,
        &location,
        client_token.as_deref(),
    );

    let response = client::current()
        .submit(&request)
        .await
        .with_context(|| format!("Failed to import object {:?}", &location))?;
    info!("Started import job {}", response.job_id);
    Ok(())
}
