//! A central place to register App routes.
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

use super::{records::record, state::Global, upload::upload};

#[expect(
    clippy::literal_string_with_formatting_args,
    reason = "Actix Web resource path uses `{param}` syntax which is not formatting but route pattern matching"
)]
/// Central place to register all the App routing.
///
/// The upload endpoint answers with and without a trailing slash.
#[tracing::instrument(skip(app, state))]
pub fn register_app<
    T: Global + Clone + 'static,
    U: MessageBody,
    V: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<U>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    app: App<V>,
    state: &T,
) -> App<V> {
    app.app_data(web::Data::new(state.clone()))
        .service(
            web::scope("/api")
                .service(
                    web::resource(["/upload/", "/upload"]).route(web::post().to(upload::<T>)),
                )
                .service(web::resource("/records/{email}").route(web::get().to(record::<T>))),
        )
}
