//! Defines the global HealthImaging client.

use crate::conf::aws_service_config;
use crate::job::{ImportJobRequest, ImportJobResponse};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use aws_sdk_medicalimaging::Client;
use once_cell::sync::OnceCell;
use tracing::instrument;

/// Something that can start import jobs.
#[async_trait]
pub trait JobSubmitter: Send + Sync {
    /// Submit a single import job, returning the service's answer.
    async fn submit(&self, request: &ImportJobRequest) -> Result<ImportJobResponse>;
}

#[async_trait]
impl JobSubmitter for Client {
    #[instrument(skip(self))]
    async fn submit(&self, request: &ImportJobRequest) -> Result<ImportJobResponse> {
        let output = self
            .start_dicom_import_job()
            .datastore_id(&request.datastore_id)
            .job_name(&request.job_name)
            .input_s3_uri(&request.input_s3_uri)
            .output_s3_uri(&request.output_s3_uri)
            .set_client_token(request.client_token.clone())
            .set_data_access_role_arn(request.data_access_role_arn.clone())
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to start import job {:?} from {:?} into datastore {:?}",
                    request.job_name, request.input_s3_uri, request.datastore_id
                )
            })?;
        Ok(ImportJobResponse {
            job_id: output.job_id().to_string(),
        })
    }
}

/// Global HealthImaging client instance.
static CURRENT: OnceCell<Client> = OnceCell::new();

/// Initialize the global HealthImaging client.
pub async fn init() -> Result<()> {
    let client = Client::new(aws_service_config().await);
    CURRENT
        .set(client)
        .map_err(|_| anyhow!("client::CURRENT was already initialized"))
}

/// Get the current HealthImaging client instance, or panic if it
/// hasn't been initialized.
pub fn current() -> &'static Client {
    CURRENT.get().expect("client is not initialized")
}
