use std::error::Error;

use catalog_admin::db::{establish_connection_pool, run_pending_migrations};
use catalog_admin::domain::pagination::SearchQuery;
use catalog_admin::models::config::ServerConfig;
use catalog_admin::repository::DieselRepository;
use catalog_admin::services::{categories, genres};

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("diesel", log::LevelFilter::Warn)
        .init();

    let config = ServerConfig::load()?;

    let pool = establish_connection_pool(&config.database_url)?;
    let applied = run_pending_migrations(&pool)?;
    log::info!(
        "Database {} ready, {applied} migration(s) applied",
        config.database_url
    );

    let repo = DieselRepository::new(pool);
    let query = SearchQuery::new(0, config.default_per_page);
    let category_page = categories::list_categories(query.clone(), &repo)?;
    let genre_page = genres::list_genres(query, &repo)?;

    log::info!(
        "Catalog holds {} categories and {} genres",
        category_page.total,
        genre_page.total
    );
    Ok(())
}
