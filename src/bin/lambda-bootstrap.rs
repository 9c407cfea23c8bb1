use anyhow::anyhow;
use healthimaging_import_trigger::event::S3Event;
use healthimaging_import_trigger::{app, client};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

/// Start one import job per S3 event record, using the invocation's
/// request id as the idempotency token.
async fn function_handler(event: LambdaEvent<S3Event>) -> Result<(), Error> {
    app::current()
        .handle(&event.payload, &event.context.request_id, client::current())
        .await?;
    Ok(())
}

/// Run an AWS Lambda function that listens to S3 upload notifications
/// and starts a HealthImaging DICOM import job for each uploaded
/// object.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();
    app::init()?;
    client::init().await?;

    run(service_fn(function_handler))
        .await
        .map_err(|e| anyhow!("{:?}", e))
}
