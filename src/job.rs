//! Defines the import job request derived from an uploaded object.

use crate::conf::Settings;
use crate::event::ObjectLocation;

/// Prefix given to every job name.
const JOB_NAME_PREFIX: &str = "import-";

/// Suffix of the sibling bucket that receives the import results.
const PROCESSED_BUCKET_SUFFIX: &str = "-processed";

/// Folder in the processed bucket that holds the import results.
const RESULTS_PREFIX: &str = "import-results/";

/// Derive the job name from an object key. Reprocessing the same key
/// always yields the same name.
pub fn job_name(key: &str) -> String {
    format!("{}{}", JOB_NAME_PREFIX, key.replace('/', "-"))
}

/// The S3 URI of the object to import.
pub fn input_s3_uri(bucket: &str, key: &str) -> String {
    format!("s3://{}/{}", bucket, key)
}

/// The S3 URI where the imaging service writes the job results.
pub fn output_s3_uri(bucket: &str) -> String {
    format!(
        "s3://{}{}/{}",
        bucket, PROCESSED_BUCKET_SUFFIX, RESULTS_PREFIX
    )
}

/// The parameters of a single DICOM import job submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportJobRequest {
    pub datastore_id: String,
    pub job_name: String,
    pub input_s3_uri: String,
    pub output_s3_uri: String,
    /// Idempotency token. Retried submissions with the same token
    /// don't create duplicate jobs.
    pub client_token: Option<String>,
    pub data_access_role_arn: Option<String>,
}

impl ImportJobRequest {
    /// Build the request importing the object at `location`.
    pub fn new(settings: &Settings, location: &ObjectLocation, client_token: Option<&str>) -> Self {
        ImportJobRequest {
            datastore_id: settings.datastore_id.clone(),
            job_name: job_name(&location.key),
            input_s3_uri: input_s3_uri(&location.bucket, &location.key),
            output_s3_uri: output_s3_uri(&location.bucket),
            client_token: client_token.map(String::from),
            data_access_role_arn: settings.data_access_role_arn.clone(),
        }
    }
}

/// What the imaging service answers to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportJobResponse {
    pub job_id: String,
}
