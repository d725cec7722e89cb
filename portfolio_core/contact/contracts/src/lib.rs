use std::future::Future;

use portfolio_models::contact::{ContactSubmission, ContactSubmissionResult};

pub mod inbox;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Validate a contact form submission and acknowledge it.
    ///
    /// Never fails: a rejected submission is reported through the returned
    /// [`ContactSubmissionResult`].
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = ContactSubmissionResult> + Send;
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: ContactSubmissionResult,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
