//! The submission client
//!
//! One POST per submitted entry, url-encoded, fire-and-report. The collector
//! is an opaque form backend: a completed round trip counts as success no
//! matter what status line comes back, and the response body is dropped
//! unread. Failures are transport-level only (DNS, refused connection,
//! broken pipe) and leave the retry decision to the person at the keyboard.
//!
//! There is deliberately no timeout and no cancellation, matching the form
//! this tool grew out of; a hung collector holds the submit control until
//! the OS gives up on the connection.

use log::{debug, error};
use reqwest::Client;

use crate::config::Settings;
use crate::error::KakeiboResult;
use crate::form::EntryDraft;

use super::encode::encode;
use super::fields::FieldIds;

/// Posts entries to the configured collector
#[derive(Debug, Clone)]
pub struct Submitter {
    client: Client,
    endpoint_url: String,
    field_ids: FieldIds,
}

impl Submitter {
    /// Create a submitter for the configured endpoint
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: Client::new(),
            endpoint_url: settings.endpoint_url.clone(),
            field_ids: settings.field_ids.clone(),
        }
    }

    /// The endpoint entries are posted to
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// The key/value pairs a draft would be posted as
    pub fn payload(&self, draft: &EntryDraft) -> Vec<(String, String)> {
        encode(draft, &self.field_ids)
    }

    /// Post one entry. Returns Ok as soon as the collector answers,
    /// whatever it answers.
    pub async fn submit(&self, draft: &EntryDraft) -> KakeiboResult<()> {
        let pairs = encode(draft, &self.field_ids);
        debug!(
            "submitting {} fields to {}",
            pairs.len(),
            self.endpoint_url
        );

        match self
            .client
            .post(&self.endpoint_url)
            .form(&pairs)
            .send()
            .await
        {
            Ok(response) => {
                debug!("collector answered {}", response.status());
                Ok(())
            }
            Err(e) => {
                error!("entry submission failed: {}", e);
                Err(e.into())
            }
        }
    }
}
