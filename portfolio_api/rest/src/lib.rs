use std::net::IpAddr;

use anyhow::Context;
use axum::{http::HeaderValue, Router};
use portfolio_core_contact_contracts::ContactService;
use tokio::net::TcpListener;

mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    config: RestServerConfig,
    contact: Contact,
}

#[derive(Debug, Clone, Default)]
pub struct RestServerConfig {
    /// Origins that may call the api from a browser. No CORS headers are sent
    /// if this is empty.
    pub allowed_origins: Vec<HeaderValue>,
}

impl RestServerConfig {
    pub fn with_allowed_origins(
        allowed_origins: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> anyhow::Result<Self> {
        let allowed_origins = allowed_origins
            .into_iter()
            .map(|origin| {
                let origin = origin.as_ref();
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid allowed origin {origin:?}"))
            })
            .collect::<anyhow::Result<_>>()?;
        Ok(Self { allowed_origins })
    }
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(config: RestServerConfig, contact: Contact) -> Self {
        Self { config, contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let listener = TcpListener::bind((host, port)).await?;
        self.serve_with_listener(listener).await
    }

    pub async fn serve_with_listener(self, listener: TcpListener) -> anyhow::Result<()> {
        let router = self.router();
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact::router(self.contact.into()));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::request_id::add(router);
        middlewares::cors::add(self.config.allowed_origins)(router)
    }
}
