use portfolio_api_rest::RestServerConfig;
use portfolio_config::Config;
use portfolio_core_contact_impl::{
    inbox::ContactInboxServiceImpl, ContactServiceConfig, ContactServiceImpl,
};
use portfolio_shared_impl::time::TimeServiceImpl;

// API
pub type RestServer = portfolio_api_rest::RestServer<Contact>;

// Shared
pub type Time = TimeServiceImpl;

// Core
pub type ContactInbox = ContactInboxServiceImpl;
pub type Contact = ContactServiceImpl<Time, ContactInbox>;

/// Wire up the rest server and everything it depends on.
pub fn rest_server(config: &Config) -> anyhow::Result<RestServer> {
    let rest_server_config = RestServerConfig::with_allowed_origins(&config.http.allowed_origins)?;

    let contact_service_config = ContactServiceConfig {
        delay: config.contact.delay.into(),
    };

    let contact = Contact::new(TimeServiceImpl, ContactInboxServiceImpl, contact_service_config);

    Ok(RestServer::new(rest_server_config, contact))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use portfolio_config::DEFAULT_CONFIG_PATH;

    use super::*;

    #[test]
    fn provide_rest_server() {
        let config = portfolio_config::load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
        rest_server(&config).unwrap();
    }

    #[test]
    fn invalid_allowed_origin() {
        let config = portfolio_config::load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &["http.allowed_origins = [\"bad\\u0000origin\"]"],
        )
        .unwrap();
        assert!(rest_server(&config).is_err());
    }
}
