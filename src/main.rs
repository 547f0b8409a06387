use actix_web::{web, App, HttpServer};
use std::io;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use biztime::api::{self, docs::ApiDoc, middleware::RequestId};
use biztime::app_state::AppState;
use biztime::config::Config;
use biztime::database;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Failed to load configuration: {}", e),
        )
    })?;
    let db = database::connect_with_settings(&config.database_settings()).await?;

    let host = config.host.clone();
    let port = config.port;
    let state = web::Data::new(AppState { db, config });

    log::info!("Starting server at http://{}:{}", host, port);
    log::info!("Swagger UI available at http://{}:{}/swagger-ui/", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestId)
            .configure(|cfg| api::configure(cfg, &state))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .default_service(web::to(api::not_found))
    })
    .bind((host, port))?
    .run()
    .await
}
