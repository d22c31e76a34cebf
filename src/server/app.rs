//! Serve the upload API.
#![allow(clippy::exit)]
use crate::analysis::Analyzer;
use crate::config::Config;
use crate::db;
use crate::server::api::state::App as AppState;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::{App, Error, HttpServer};
use tracing_actix_web::TracingLogger;

use std::{io, process};

use actix_http::body::MessageBody;
use actix_service::ServiceFactory;

use super::api::state::Global;
use super::tracing::LexisRootSpanBuilder;
use crate::server::api::routes;

/// Serve the upload API on the configured address.
///
/// # Errors
/// Errors if the listener cannot be bound.
#[actix_web::main]
pub async fn serve(config: Config) -> io::Result<()> {
    let bind = config.server.bind.clone();
    let port = config.server.port;
    tracing::info!("Running Lexis upload server on http://{bind}:{port}.");

    let db = match db::init::connect(&config.database_url()).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(
                "error: could not connect to database. Confirm that DATABASE_URL env var is set correctly."
            );
            tracing::error!("Error: {:?}", err);
            process::exit(1);
        }
    };

    let state = AppState {
        db,
        analyzer: Analyzer::from_config(&config.analysis),
        upload: config.upload.clone(),
        analysis_timeout: config.analysis.timeout(),
    };

    HttpServer::new(move || init_app(&state))
        .bind((bind.as_str(), port))?
        .run()
        .await
}

/// Initialize the application and all possible routing at start-up time.
///
/// # Arguments
/// * `state` - The application state
pub fn init_app<T: Global + Clone + 'static>(
    state: &T,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
> {
    routes::register_app(
        App::new().wrap(TracingLogger::<LexisRootSpanBuilder>::new()),
        state,
    )
}
