use pf_app::ContextProvider;
use std::time::Duration;
use tracing::info;
use widget_refresher::config::Config;
use widget_refresher::fetch::HttpImageFetcher;
use widget_refresher::host::DirectoryHost;
use widget_refresher::platform::StaticPlatform;
use widget_refresher::service::UpdateService;
use widget_refresher::store::JsonFileStore;

struct AppContext {
    config: Config,
    service: UpdateService<JsonFileStore, DirectoryHost, HttpImageFetcher, StaticPlatform>,
}

impl ContextProvider<Config> for AppContext {
    async fn new(config: Config) -> Self {
        let service = UpdateService::new(
            JsonFileStore::new(&config.preferences_path),
            DirectoryHost::new(&config.widgets_root),
            HttpImageFetcher::new(),
            StaticPlatform {
                screen_on: config.assume_screen_on,
                wifi: config.assume_wifi,
            },
        );

        Self { config, service }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let context = pf_app::create_app_context::<AppContext, Config>().await?;

    info!(
        "Update service starting, ticking every {}s",
        context.config.tick_interval_seconds
    );

    // A fresh start behaves like a widget-count change: one explicit
    // update request before settling into the tick cadence.
    context.service.on_update_requested().await;

    let mut tick = tokio::time::interval(Duration::from_secs(
        context.config.tick_interval_seconds,
    ));
    // The first interval tick completes immediately and would double up
    // with the startup request; consume it here.
    tick.tick().await;

    loop {
        tokio::select! {
            _ = tick.tick() => {
                context.service.on_time_tick().await;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    Ok(())
}
