use chrono::SecondsFormat;
use portfolio_core_contact_contracts::inbox::ContactInboxService;
use portfolio_models::contact::ContactSubmissionRecord;
use tracing::info;

/// Inbox that writes every accepted submission to the operator log.
///
/// Nothing is stored or forwarded; the log event is the only trace a
/// submission leaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactInboxServiceImpl;

impl ContactInboxService for ContactInboxServiceImpl {
    async fn record(&self, record: ContactSubmissionRecord) {
        let ContactSubmissionRecord {
            name,
            email,
            subject,
            message,
            submitted_at,
        } = record;

        info!(
            target: "portfolio::contact",
            %name,
            %email,
            %subject,
            content = %message,
            timestamp = %submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            "Contact form submission"
        );
    }
}
