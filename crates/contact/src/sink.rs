use ulid::Ulid;

use crate::ContactRequest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub id: String,
}

/// Destination for accepted contact requests.
pub trait SubmissionSink: Send + Sync {
    fn submit(&self, request: &ContactRequest) -> crate::Result<Receipt>;
}

/// Records each request in the log and nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&self, request: &ContactRequest) -> crate::Result<Receipt> {
        let id = Ulid::new().to_string();

        tracing::info!(
            id = %id,
            first_name = %request.first_name,
            last_name = %request.last_name,
            email = %request.email,
            query_type = %request.query_type,
            message = %request.message,
            consent = request.consent,
            "contact request received"
        );

        Ok(Receipt { id })
    }
}
