//! Defines the read-only application state and the handling of
//! notification batches.

use crate::client::JobSubmitter;
use crate::conf::Settings;
use crate::event::S3Event;
use crate::job::ImportJobRequest;
use anyhow::{anyhow, Context, Result};
use envy::from_env;
use once_cell::sync::OnceCell;
use tracing::{info, instrument};

/// An App is an initialized application state, derived from
/// settings.
#[derive(Debug)]
pub struct App {
    /// The original settings.
    pub settings: Settings,
}

impl App {
    /// Initialize an App instance given a settings struct. Consumes
    /// the settings struct.
    pub fn new(settings: Settings) -> Self {
        App { settings }
    }

    /// Start one import job per record, in order, using `request_id`
    /// as the idempotency token. Stops at the first failure; records
    /// after it are left unsubmitted. Returns the started job ids.
    #[instrument(skip(self, event, submitter), fields(records = event.records.len()))]
    pub async fn handle<S>(
        &self,
        event: &S3Event,
        request_id: &str,
        submitter: &S,
    ) -> Result<Vec<String>>
    where
        S: JobSubmitter + ?Sized,
    {
        let mut job_ids = Vec::with_capacity(event.records.len());
        for (index, record) in event.records.iter().enumerate() {
            let location = record
                .location()
                .with_context(|| format!("Malformed notification record #{}", index))?;
            let request = ImportJobRequest::new(&self.settings, &location, Some(request_id));
            let response = submitter.submit(&request).await.with_context(|| {
                format!(
                    "Failed to import object {:?} from bucket {:?}",
                    location.key, location.bucket
                )
            })?;
            info!("Started import job {}", response.job_id);
            job_ids.push(response.job_id);
        }
        Ok(job_ids)
    }
}

/// Global App instance.
static CURRENT: OnceCell<App> = OnceCell::new();

/// Initialize the global App instance.
pub fn init() -> Result<()> {
    let settings = from_env().context("Failed to read settings from the environment")?;
    CURRENT
        .set(App::new(settings))
        .map_err(|_| anyhow!("app::CURRENT was already initialized"))
}

/// Get the current App instance, or panic if it hasn't been
/// initialized.
pub fn current() -> &'static App {
    CURRENT.get().expect("app is not initialized")
}
