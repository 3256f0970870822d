use user_directory::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_tracing(&config)?;

    tracing::info!("Starting user directory service");

    let pool = create_pool(&config.database).await?;
    let state = AppState::new(PgUserRepository::new(pool));

    Server::new(config).serve(router(state)).await
}
