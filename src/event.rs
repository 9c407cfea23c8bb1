//! Defines the S3 notification event as delivered to the function,
//! reduced to the fields the trigger reads.

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// A batch of S3 notification records.
#[derive(Debug, Deserialize)]
pub struct S3Event {
    #[serde(rename = "Records")]
    pub records: Vec<S3EventRecord>,
}

/// A single S3 notification record. Everything is optional here so
/// that a malformed record only fails when it's reached.
#[derive(Debug, Default, Deserialize)]
pub struct S3EventRecord {
    #[serde(default)]
    pub s3: Option<S3Entity>,
}

#[derive(Debug, Default, Deserialize)]
pub struct S3Entity {
    #[serde(default)]
    pub bucket: Option<S3Bucket>,
    #[serde(default)]
    pub object: Option<S3Object>,
}

#[derive(Debug, Default, Deserialize)]
pub struct S3Bucket {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct S3Object {
    #[serde(default)]
    pub key: Option<String>,
}

/// The bucket and key of an uploaded object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl S3EventRecord {
    /// Extract the object location. The key is taken verbatim, as
    /// found in the notification.
    pub fn location(&self) -> Result<ObjectLocation> {
        let s3 = self
            .s3
            .as_ref()
            .ok_or_else(|| anyhow!("record is missing the s3 entity"))?;
        let bucket = s3
            .bucket
            .as_ref()
            .and_then(|b| b.name.clone())
            .ok_or_else(|| anyhow!("record is missing s3.bucket.name"))?;
        let key = s3
            .object
            .as_ref()
            .and_then(|o| o.key.clone())
            .ok_or_else(|| anyhow!("record is missing s3.object.key"))?;
        Ok(ObjectLocation { bucket, key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_notification() {
        let event: S3Event = serde_json::from_value(json!({
            "Records": [{
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "bucket": {"name": "scans", "arn": "arn:aws:s3:::scans"},
                    "object": {"key": "patient1/study2/img.dcm", "size": 1024}
                }
            }]
        }))
        .unwrap();
        assert_eq!(event.records.len(), 1);
        assert_eq!(
            event.records[0].location().unwrap(),
            ObjectLocation {
                bucket: String::from("scans"),
                key: String::from("patient1/study2/img.dcm"),
            }
        );
    }

    #[test]
    fn key_is_not_decoded() {
        let event: S3Event = serde_json::from_value(json!({
            "Records": [{"s3": {"bucket": {"name": "b"}, "object": {"key": "a+b%20c.dcm"}}}]
        }))
        .unwrap();
        assert_eq!(event.records[0].location().unwrap().key, "a+b%20c.dcm");
    }

    #[test]
    fn malformed_record_still_parses_but_has_no_location() {
        let event: S3Event = serde_json::from_value(json!({
            "Records": [{"s3": {"bucket": {"name": "b"}}}, {}]
        }))
        .unwrap();
        let err = event.records[0].location().unwrap_err();
        assert!(err.to_string().contains("s3.object.key"));
        let err = event.records[1].location().unwrap_err();
        assert!(err.to_string().contains("s3 entity"));
    }

    #[test]
    fn records_are_required() {
        let result: Result<S3Event, _> = serde_json::from_value(json!({}));
        assert!(result.is_err());
    }
}
