use anyhow::Context;
use wichtel::domain::config::AppConfig;
use wichtel::kernel::config::load_config;
use wichtel_logger::Logger;
use wichtel_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg: AppConfig = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
