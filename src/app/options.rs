use std::time::Duration;

/// Runtime tuning for the terminal host.
#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub show_help: bool,
    /// Height share of the master list, in percent of the screen.
    pub master_percent: u16,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            show_help: true,
            master_percent: 80,
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_master_percent(mut self, percent: u16) -> Self {
        self.master_percent = percent.clamp(10, 90);
        self
    }
}
