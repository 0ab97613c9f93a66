use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use soal_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    // A generator that cannot be loaded makes the whole service useless.
    let state = match AppState::new(config.clone()).await {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    log::info!(
        "starting HTTP server on http://{}:{}",
        config.web_server_host,
        config.web_server_port
    );

    let allowed_origins = config.allowed_origins.clone();

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .expose_headers(vec![soal_server::middleware::REQUEST_ID_HEADER])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(cors)
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
