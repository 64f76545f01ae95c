use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{info, warn};
use types::{RefreshSummary, Trigger, WidgetId};

use crate::fetch::ImageFetcher;
use crate::host::WidgetHost;
use crate::platform::Platform;
use crate::policy::{self, ThrottleDecision};
use crate::store::PreferenceStore;

/// Drives refresh passes in response to host triggers.
///
/// Owns the throttle clock; everything else lives behind the collaborator
/// seams it is constructed with. The clock starts at zero, so the first
/// trigger after process start is always due (at worst one extra eager
/// refresh after a restart).
pub struct UpdateService<S, H, F, P> {
    store: S,
    host: H,
    fetcher: F,
    platform: P,
    last_update_ms: AtomicI64,
}

impl<S, H, F, P> UpdateService<S, H, F, P>
where
    S: PreferenceStore,
    H: WidgetHost,
    F: ImageFetcher,
    P: Platform,
{
    pub fn new(store: S, host: H, fetcher: F, platform: P) -> Self {
        Self {
            store,
            host,
            fetcher,
            platform,
            last_update_ms: AtomicI64::new(0),
        }
    }

    /// Millisecond timestamp of the last performed pass, zero before the
    /// first one.
    pub fn last_update_ms(&self) -> i64 {
        self.last_update_ms.load(Ordering::Relaxed)
    }

    /// Periodic system time tick.
    pub async fn on_time_tick(&self) -> RefreshSummary {
        self.run_pass_at(Utc::now().timestamp_millis(), Trigger::TimeTick)
            .await
    }

    /// The display was just powered on.
    pub async fn on_screen_on(&self) -> RefreshSummary {
        self.run_pass_at(Utc::now().timestamp_millis(), Trigger::ScreenOn)
            .await
    }

    /// Explicit update request, e.g. on first placement or a widget-count
    /// change.
    pub async fn on_update_requested(&self) -> RefreshSummary {
        self.run_pass_at(Utc::now().timestamp_millis(), Trigger::UpdateRequested)
            .await
    }

    /// One evaluation of the throttle policy, with the fetch-and-render
    /// step when the gate opens.
    ///
    /// The throttle clock advances whenever the gate opens, even if every
    /// individual fetch fails; a broken URL waits out the full interval
    /// like everything else.
    pub async fn run_pass_at(&self, now_ms: i64, trigger: Trigger) -> RefreshSummary {
        let prior = self.last_update_ms.load(Ordering::Relaxed);
        let screen_on = self.platform.screen_on();
        let wifi = self.platform.wifi_connected();

        match policy::evaluate(now_ms, prior, screen_on, wifi) {
            ThrottleDecision::NotDue => RefreshSummary::skipped(prior),
            ThrottleDecision::ScreenOff => {
                info!("Refresh due on {} but the screen is off", trigger.as_str());
                RefreshSummary::skipped(prior)
            }
            ThrottleDecision::Refresh => {
                // Overlapping passes may both write the clock; the second
                // overwrite is idempotent.
                self.last_update_ms.store(now_ms, Ordering::Relaxed);

                let instances = self.host.list_instances();
                info!(
                    "Refreshing {} widgets on {}",
                    instances.len(),
                    trigger.as_str()
                );

                let mut updated = 0;
                for id in &instances {
                    if self.refresh_instance(id).await {
                        updated += 1;
                    }
                }

                RefreshSummary {
                    performed: true,
                    last_update_ms: now_ms,
                    widgets_processed: instances.len(),
                    widgets_updated: updated,
                }
            }
        }
    }

    /// Fetch and render one instance. Failures stay local to the
    /// instance: the prior image keeps showing and the rest of the pass
    /// continues.
    async fn refresh_instance(&self, id: &WidgetId) -> bool {
        let Some(url) = self.store.get(id) else {
            // Placed but never configured; nothing to do.
            return false;
        };
        if url.is_empty() {
            return false;
        }

        let image = match self.fetcher.fetch(&url).await {
            Ok(image) => image,
            Err(e) => {
                warn!("Image for widget {} cannot be loaded: {}", id, e);
                return false;
            }
        };

        if let Err(e) = self.host.render(id, &image) {
            warn!("Failed to render image for widget {}: {}", id, e);
            return false;
        }

        info!("Widget {} updated", id);
        true
    }
}
