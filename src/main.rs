use rocket::serde::json::Json;
use rocket::*;

mod config;
mod database;
mod leaderboard;
mod score_id;
mod telemetry;

use crate::config::ServerConfig;
use crate::database::{requests, requests::Message, ScoreStore};

#[launch]
async fn rocket() -> _ {
    telemetry::init_tracing();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    build(config)
        .await
        .expect("failed to connect to a database")
}

/// Connects to the score database and builds the rocket.
pub async fn build(config: ServerConfig) -> Result<Rocket<Build>, sqlx::Error> {
    let store = ScoreStore::connect(&config).await?;
    tracing::info!(url = %config.database_url, "connected to the score database");
    Ok(serve(store))
}

/// Builds the rocket over an already connected store.
pub fn serve(store: ScoreStore) -> Rocket<Build> {
    rocket::build()
        .mount(
            "/",
            routes![
                index,
                requests::get_top,
                requests::add_score,
                requests::get_around,
                requests::delete_score,
                requests::reset_leaderboard,
            ],
        )
        .register("/", catchers![requests::default_catcher])
        .manage(store)
}

#[get("/")]
fn index() -> Json<Message> {
    Message::new("Welcome to the Guns Survival Online Leaderboard API!")
}
