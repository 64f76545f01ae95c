/// Environmental facts the refresh policy needs from the host platform.
pub trait Platform: Send + Sync {
    /// Whether the display is currently powered on.
    fn screen_on(&self) -> bool;

    /// Whether the active network interface is Wi-Fi.
    fn wifi_connected(&self) -> bool;
}

/// Probe with both facts fixed at construction.
///
/// Headless deployments have no display or radio to interrogate; hosts
/// that do supply their own `Platform`.
#[derive(Debug, Clone, Copy)]
pub struct StaticPlatform {
    pub screen_on: bool,
    pub wifi: bool,
}

impl Platform for StaticPlatform {
    fn screen_on(&self) -> bool {
        self.screen_on
    }

    fn wifi_connected(&self) -> bool {
        self.wifi
    }
}
