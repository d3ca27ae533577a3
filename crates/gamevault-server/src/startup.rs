//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
   ______                     _    __            ____
  / ____/___ _____ ___  ___  | |  / /___ ___  __/ / /_
 / / __/ __ `/ __ `__ \/ _ \ | | / / __ `/ / / / / __/
/ /_/ / /_/ / / / / / /  __/ | |/ / /_/ / /_/ / / /_
\____/\__,_/_/ /_/ /_/\___/  |___/\__,_/\__,_/_/\__/

    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(host: &str, port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}:{}/api/v1", host, port);
    info!("Cached:    http://{}:{}/api/v2", host, port);
    info!("Health:    http://{}:{}/health", host, port);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info("0.0.0.0", 8080);
    }
}
