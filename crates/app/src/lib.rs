//! Desktop window for `pulse`.
//!
//! Owns the Iced application loop and wires together:
//! - the sampling timer (`update_interval_ms`, default 1s)
//! - the config file watcher (live reload on change)
//!
//! The [`SystemSampler`] is owned by the application state and driven from
//! `update()` through `ticker`; the view only reads the [`AppState`] copy
//! taken after each sample.

mod ticker;

use futures::channel::mpsc::Sender;
use iced::{
    widget::{column, container, row, text},
    Element, Length, Size, Subscription, Task,
};
use pulse_config::{default_path, load as load_config, ConfigWatcher, PulseConfig};
use pulse_core::{event::Message, state::AppState};
use pulse_system::{format::to_kib, SystemSampler};
use pulse_theme::Theme;
use pulse_widgets::{GaugeKind, GaugeWidget, LinePlot, NetworkWidget};
use std::time::Duration;
use tracing::{info, warn};

const TITLE: &str = "Pulse System Info";

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the monitor window.  Returns when the window is closed.
pub fn run() -> iced::Result {
    let config = read_config();
    let size = Size::new(config.global.window_width, config.global.window_height);

    iced::application(Pulse::new, Pulse::update, Pulse::view)
        .title(Pulse::title)
        .subscription(Pulse::subscription)
        .style(Pulse::style)
        .window_size(size)
        .run()
}

fn read_config() -> PulseConfig {
    load_config(default_path()).unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        PulseConfig::default()
    })
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Pulse {
    state:   AppState,
    config:  PulseConfig,
    theme:   Theme,
    /// `None` until the OS counters could be opened; retried every tick.
    sampler: Option<SystemSampler>,
    cpu:     GaugeWidget,
    ram:     GaugeWidget,
    network: NetworkWidget,
}

impl Pulse {
    fn new() -> (Self, Task<Message>) {
        let config = read_config();
        let theme  = Theme::from_config(&config.theme);

        let mut pulse = Self {
            state:   AppState::default(),
            config,
            theme,
            sampler: None,
            cpu:     GaugeWidget::new(GaugeKind::Cpu),
            ram:     GaugeWidget::new(GaugeKind::Ram),
            network: NetworkWidget::new(),
        };

        let task = if ticker::open(&mut pulse.sampler, &mut pulse.state, SystemSampler::system) {
            let delay = ticker::first_tick_delay(pulse.config.global.update_interval());
            Task::perform(tokio::time::sleep(delay), |()| Message::Tick)
        } else {
            Task::none()
        };

        (pulse, task)
    }

    fn title(&self) -> String {
        match self.state.last_error {
            Some(_) => format!("{TITLE} (sampling failed)"),
            None    => TITLE.to_string(),
        }
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => ticker::tick(&mut self.sampler, &mut self.state, SystemSampler::system),
            Message::ConfigReloaded => match load_config(default_path()) {
                Ok(cfg) => {
                    info!(interval_ms = cfg.global.update_interval_ms, "Config reloaded");
                    self.theme  = Theme::from_config(&cfg.theme);
                    self.config = cfg;
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
        }
        Task::none()
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let gap = f32::from(self.theme.gap);
        let pad = self.theme.padding;
        let history = &self.state.history;

        // ── Left: gauges, rates, status ──────────────────────────────────────
        let status = text(self.state.status_line())
            .size(self.theme.font_size - 2.0)
            .color(self.theme.foreground.with_alpha(0.6).to_iced());

        let left = column![
            self.cpu.view(&self.state, &self.theme),
            self.ram.view(&self.state, &self.theme),
            self.network.view(&self.state, &self.theme),
            status,
        ]
        .spacing(gap * 2.0);

        // ── Right: time-series plots ─────────────────────────────────────────
        let cpu_plot = LinePlot::new("CPU (%)", &self.theme)
            .y_range(100.0)
            .series("CPU", history.cpu.clone(), self.theme.cpu_line)
            .view();

        let ram_plot = LinePlot::new("RAM (%)", &self.theme)
            .y_range(100.0)
            .series("RAM", history.ram.clone(), self.theme.ram_line)
            .view();

        let net_plot = LinePlot::new("Network (KB/s)", &self.theme)
            .series("Sent", history.net_sent.iter().copied().map(to_kib).collect(), self.theme.sent_line)
            .series("Recv", history.net_recv.iter().copied().map(to_kib).collect(), self.theme.recv_line)
            .scaled_to(to_kib(history.net_peak))
            .legend()
            .view();

        let right = column![cpu_plot, ram_plot, net_plot]
            .spacing(gap)
            .height(Length::Fill);

        row![
            container(left)
                .width(Length::FillPortion(3))
                .padding(pad),
            container(right)
                .width(Length::FillPortion(4))
                .height(Length::Fill)
                .padding(pad),
        ]
        .spacing(gap)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        // Identity is the duration, so a reloaded interval restarts the timer.
        let tick = iced::time::every(self.config.global.update_interval()).map(|_| Message::Tick);

        Subscription::batch([tick, Subscription::run(config_stream)])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color:       self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches `~/.config/pulse/pulse.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            info!("Config change detected: {}", watcher.path().display());
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        // Watcher gave up (no config dir); stall rather than end the subscription.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
