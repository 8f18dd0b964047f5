mod cors;

use std::io;

use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use common::{env_config::Config, http};

const WELCOME: &str = "Welcome to the Subscription Tracker API!";

#[get("/")]
async fn welcome() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME)
}

/// Extractor error handling plus the route table. Shared by the server and the tests.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(http::path_config())
        .app_data(http::json_config())
        .service(welcome)
        .service(
            web::scope("/api/v1")
                .service(api_auth::mount_auth())
                .service(api_auth::mount_users())
                .service(api_subs::mount_subs()),
        );
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // get env vars
    let config = Config::from_env().map_err(io::Error::other)?;
    let config_data = config.clone();

    // get info
    let logger_enabled = config.console_logging_enabled;
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if logger_enabled {
        logger::setup(config.log_level).map_err(io::Error::other)?;
    }

    // init db connection
    let pool = db::setup(&config.database_url, config.is_production())
        .await
        .map_err(io::Error::other)?;

    log::info!(
        "Subscription Tracker API is running at http://{}:{}",
        config.server_host,
        config.server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .wrap(logger::middleware(logger_enabled)) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .configure(routes)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
