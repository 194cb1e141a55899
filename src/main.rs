use std::env;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;

use consub_admin::{AppState, config, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let app_config = match config::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("invalid configuration: {e:#}");
            std::process::exit(1);
        }
    };

    info!("upstream API: {}", app_config.api_endpoint);
    info!("tenant domain: {}", app_config.tenant_domain);
    if let Some(ref host) = app_config.test_tenant_host {
        info!("forwarding fixed tenant host: {host}");
    }

    let state = web::Data::new(AppState::new(app_config));

    let allowed_origins = env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".into());

    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_address = format!("0.0.0.0:{port}");

    info!("starting server on {bind_address}");

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec!["authorization", "content-type", "accept"])
            .supports_credentials()
            .max_age(3600);

        for origin in allowed_origins
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
        {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
