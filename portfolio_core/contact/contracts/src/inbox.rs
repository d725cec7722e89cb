use std::future::Future;

use portfolio_models::contact::ContactSubmissionRecord;

/// Destination for accepted contact form submissions.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactInboxService: Send + Sync + 'static {
    fn record(&self, record: ContactSubmissionRecord) -> impl Future<Output = ()> + Send;
}

#[cfg(feature = "mock")]
impl MockContactInboxService {
    pub fn with_record(mut self, record: ContactSubmissionRecord) -> Self {
        self.expect_record()
            .once()
            .with(mockall::predicate::eq(record))
            .return_once(|_| Box::pin(std::future::ready(())));
        self
    }
}
