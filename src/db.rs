use log::info;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;

use crate::config::Config;
use crate::error::Result;

/// Opens a connection to the store described by `config`, signs in and
/// selects the namespace and database.
pub async fn connect(config: &Config) -> Result<Surreal<Any>> {
    let db = any::connect(config.url.as_str()).await?;

    db.signin(Root {
        username: config.cred.user.as_str(),
        password: config.cred.pass.as_str(),
    })
    .await?;

    db.use_ns(config.namespace.as_str())
        .use_db(config.database.as_str())
        .await?;

    info!(
        "connected to {} (ns: {}, db: {})",
        config.url, config.namespace, config.database
    );

    Ok(db)
}
