use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_genius::{
    app_state::AppState,
    config::Config,
    handlers::{configure_quiz_routes, health_check, health_check_ready},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(&config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    log::info!("Starting QuizGenius on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .service(health_check)
            .service(health_check_ready)
            .configure(configure_quiz_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
