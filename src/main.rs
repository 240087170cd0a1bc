use std::sync::Arc;

use futures::future::join_all;

use q_data_api::modules::notify::LogNotifier;
use q_data_api::{Config, DataManager, Facade};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error in configuration: {e}");
            std::process::exit(1);
        }
    };

    let manager = match DataManager::connect(&config).await {
        Ok(manager) => manager,
        Err(e) => {
            eprintln!("Error connecting to {}: {e}", config.url);
            std::process::exit(1);
        }
    };

    let facade = Facade::new(manager, Arc::new(LogNotifier));

    let Some(centers) = facade.fetch_centers().await else {
        std::process::exit(1);
    };

    let programs = join_all(
        centers
            .iter()
            .map(|center| facade.fetch_programs_by_center(center.center_id)),
    )
    .await;

    for (center, programs) in centers.iter().zip(programs) {
        println!("{} ({})", center.name, center.location);

        for program in programs.unwrap_or_default() {
            println!("  {}", program.name);

            for table in facade
                .fetch_tables_by_program(program.program_id)
                .await
                .unwrap_or_default()
            {
                println!("    {}", table.name);
            }
        }
    }
}
