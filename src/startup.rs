use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::email_client::{EmailClient, MailRelay, Outbox};
use crate::routes::{
    contact, health_check, json_error_handler, method_not_allowed, preflight,
    request_partnership,
};
use crate::utils::cors_headers;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Builds the server around a pooled SMTP client.
    pub async fn build(configuration: &Settings) -> Result<Self, anyhow::Error> {
        let email_client = EmailClient::from_settings(&configuration.smtp)
            .context("Failed to build the SMTP client.")?;
        Self::build_with_relay(configuration, Arc::new(email_client)).await
    }

    /// Builds the server around any relay. Tests hand in an in-memory one.
    pub async fn build_with_relay(
        configuration: &Settings,
        relay: Arc<dyn MailRelay>,
    ) -> Result<Self, anyhow::Error> {
        // Credentials are checked here, not on the first submission.
        let account = configuration.smtp.account()?;
        let outbox = Outbox::new(account);

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)
            .with_context(|| format!("Failed to bind to {}", address))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, relay, outbox)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    relay: Arc<dyn MailRelay>,
    outbox: Outbox,
) -> Result<Server, std::io::Error> {
    // web::Data is an Arc, so cloning it inside the closure is cheap.
    let relay: web::Data<dyn MailRelay> = web::Data::from(relay);
    let outbox = web::Data::new(outbox);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors_headers())
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health_check", web::get().to(health_check))
            // The website posts to /api/*; the bare paths are kept for other callers.
            .service(
                web::resource(["/contact", "/api/contact"])
                    .route(web::post().to(contact))
                    .route(web::method(Method::OPTIONS).to(preflight))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource(["/send-email", "/api/send-email"])
                    .route(web::post().to(request_partnership))
                    .route(web::method(Method::OPTIONS).to(preflight))
                    .default_service(web::to(method_not_allowed)),
            )
            .app_data(relay.clone())
            .app_data(outbox.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
