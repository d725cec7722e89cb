use std::time::Duration;

use portfolio_core_contact_contracts::{inbox::ContactInboxService, ContactService};
use portfolio_models::contact::{
    ContactEmailAddress, ContactSubmission, ContactSubmissionError, ContactSubmissionRecord,
    ContactSubmissionResult,
};
use portfolio_shared_contracts::time::TimeService;
use tracing::debug;

pub mod inbox;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Time, Inbox> {
    time: Time,
    inbox: Inbox,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Time to wait before a submission is answered, regardless of the
    /// outcome.
    pub delay: Duration,
}

impl ContactServiceConfig {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);
}

impl Default for ContactServiceConfig {
    fn default() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
        }
    }
}

impl<Time, Inbox> ContactServiceImpl<Time, Inbox> {
    pub fn new(time: Time, inbox: Inbox, config: ContactServiceConfig) -> Self {
        Self {
            time,
            inbox,
            config,
        }
    }
}

impl<Time, Inbox> ContactService for ContactServiceImpl<Time, Inbox>
where
    Time: TimeService,
    Inbox: ContactInboxService,
{
    #[tracing::instrument(skip_all)]
    async fn submit(&self, submission: ContactSubmission) -> ContactSubmissionResult {
        tokio::time::sleep(self.config.delay).await;

        match self.accept(submission).await {
            Ok(result) => result,
            Err(err) => {
                debug!(%err, "rejected contact form submission");
                err.into()
            }
        }
    }
}

impl<Time, Inbox> ContactServiceImpl<Time, Inbox>
where
    Time: TimeService,
    Inbox: ContactInboxService,
{
    async fn accept(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactSubmissionResult, ContactSubmissionError> {
        if !submission.is_complete() {
            return Err(ContactSubmissionError::MissingField);
        }

        let ContactSubmission {
            name,
            email,
            subject,
            message,
        } = submission;

        let email = ContactEmailAddress::try_new(email)
            .map_err(|_| ContactSubmissionError::InvalidEmailFormat)?;

        let result = ContactSubmissionResult::accepted(&name, &email);

        self.inbox
            .record(ContactSubmissionRecord {
                name,
                email,
                subject,
                message,
                submitted_at: self.time.now(),
            })
            .await;

        Ok(result)
    }
}
