use anyhow::Result;

use firstline_core::config::ServerConfig;

pub(super) fn serve(config: &ServerConfig) -> Result<()> {
    firstline_web::serve_web(&config.host, config.port)
}
