use std::io::Error;
use std::sync::Arc;

use poem::{Server, listener::TcpListener};
use sqlx::postgres::PgPoolOptions;
use tokio::main;
use tracing::info;

use user_directory::{
    config::Config,
    domain::repositories::UserRepository,
    infrastructure::repositories::{
        in_memory::InMemoryUserRepository, postgres::PostgresUserRepository,
    },
    presentation::http::{build_app, endpoints::root::ApiState},
};

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::try_parse().map_err(Error::other)?;

    let repository: Arc<dyn UserRepository> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .connect(url)
                .await
                .map_err(Error::other)?;
            sqlx::migrate!().run(&pool).await.map_err(Error::other)?;
            info!("using postgres user store");
            PostgresUserRepository::new(pool)
        }
        None => {
            info!("using in-memory user store");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    let state = Arc::new(ApiState::new(repository));
    let app = build_app(state);

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);
    info!("starting server at {}", server_url);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}
