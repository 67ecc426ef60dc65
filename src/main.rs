//! # crane-checkconfig
//!
//! Loads the Crane configuration exactly the way the service does and
//! reports the effective values, so operators can vet a config file before
//! restarting anything. Exits non-zero when the configuration is unusable.

use anyhow::Result;
use tracing::info;

use crane_config::config::Settings;

fn main() -> Result<()> {
    crane_config::telemetry::init_tracing();

    let settings = Settings::load()?;

    info!(
        debug = settings.general.debug,
        data_dir = %settings.general.data_dir,
        endpoint = %settings.general.endpoint,
        polling_interval = settings.general.data_dir_polling_interval,
        serve_content = settings.general.serve_content,
        "configuration ok"
    );
    if !settings.gsa.url.is_empty() {
        info!(url = %settings.gsa.url, "gsa search enabled");
    }
    if !settings.solr.url.is_empty() {
        info!(url = %settings.solr.url, "solr search enabled");
    }

    Ok(())
}
