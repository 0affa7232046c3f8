//! Apply, roll back or rebuild the schema of the configured database.
//!
//! ```bash
//! cargo run -p infrastructure --example run_migrations -- [up|down|fresh]
//! ```

use infrastructure::{Settings, database};
use migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let settings = Settings::load("config")?;
    let command = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());

    println!("Connecting to database...");
    let connection = database::connect(&settings.database).await?;

    match command.as_str() {
        "up" => Migrator::up(&connection, None).await?,
        "down" => Migrator::down(&connection, None).await?,
        "fresh" => Migrator::fresh(&connection).await?,
        other => return Err(format!("unknown command '{other}', expected up, down or fresh").into()),
    }

    println!("Migration command '{command}' applied.");
    Ok(())
}
