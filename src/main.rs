use wufoo_report::{EnvConfig, ReportPaths, WufooClient, report};

fn main() {
    env_logger::init();
    log::info!("{} v{}", wufoo_report::name(), wufoo_report::version());

    let config = match EnvConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let result = WufooClient::new(config)
        .and_then(|client| report::run(&client, &ReportPaths::default()));

    if let Err(e) = result {
        log::error!("Report run failed: {}", e);
        std::process::exit(1);
    }
}
