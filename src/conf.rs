//! Defines configuration as read from the environment.

use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_medicalimaging::config::Region;
use serde::Deserialize;
use std::env;
use tokio::sync::OnceCell;

/// The import trigger is configured to submit jobs into a single
/// HealthImaging datastore. The configuration must be given as
/// environment variables.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// The datastore that receives every imported object.
    pub datastore_id: String,

    /// The IAM role the imaging service assumes to read the source
    /// objects and write the import results. Forwarded only if
    /// present.
    #[serde(default)]
    pub data_access_role_arn: Option<String>,
}

/// Shared AWS configuration, loaded once.
static AWS_CONFIG: OnceCell<SdkConfig> = OnceCell::const_new();

/// Load the AWS service configuration, honoring an optional
/// `AWS_ENDPOINT_URL` override.
async fn load_aws_config() -> SdkConfig {
    if let Ok(endpoint_url) = env::var("AWS_ENDPOINT_URL") {
        aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url(
                if endpoint_url.starts_with("http://") || endpoint_url.starts_with("https://") {
                    endpoint_url
                } else {
                    format!("https://{}", endpoint_url)
                },
            )
            .region(Region::new("us-east-1")) // should be OK since the endpoint was overridden
            .load()
            .await
    } else {
        aws_config::defaults(BehaviorVersion::latest()).load().await
    }
}

/// Get the shared AWS service configuration.
pub async fn aws_service_config() -> &'static SdkConfig {
    AWS_CONFIG.get_or_init(load_aws_config).await
}
