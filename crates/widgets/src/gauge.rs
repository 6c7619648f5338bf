use pulse_core::{event::Message, state::AppState};
use pulse_theme::Theme;
use iced::{
    widget::{column, progress_bar, text},
    Background, Border, Element, Length,
};

/// Which percentage a gauge shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeKind {
    Cpu,
    Ram,
}

impl GaugeKind {
    fn name(self) -> &'static str {
        match self {
            GaugeKind::Cpu => "CPU",
            GaugeKind::Ram => "RAM",
        }
    }

    fn value(self, state: &AppState) -> f64 {
        match self {
            GaugeKind::Cpu => state.sample.cpu_percent,
            GaugeKind::Ram => state.sample.ram_percent,
        }
    }
}

/// Label plus 0–100 bar for CPU or RAM usage.
#[derive(Debug)]
pub struct GaugeWidget {
    kind: GaugeKind,
}

impl GaugeWidget {
    pub fn new(kind: GaugeKind) -> Self {
        Self { kind }
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let value = self.kind.value(state);
        let track = theme.foreground.with_alpha(0.12).to_iced();
        let fill  = theme.accent.to_iced();

        column![
            text(label(self.kind, value)).size(theme.font_size),
            progress_bar(0.0..=100.0, value as f32)
                .length(Length::Fill)
                .girth(14.0)
                .style(move |_: &iced::Theme| progress_bar::Style {
                    background: Background::Color(track),
                    bar:        Background::Color(fill),
                    border:     Border { radius: 4.0.into(), ..Default::default() },
                }),
        ]
        .spacing(4)
        .into()
    }
}

fn label(kind: GaugeKind, value: f64) -> String {
    format!("{}: {value:.1}%", kind.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::Sample;

    #[test]
    fn label_has_one_decimal() {
        assert_eq!(label(GaugeKind::Cpu, 12.345), "CPU: 12.3%");
        assert_eq!(label(GaugeKind::Ram, 40.0), "RAM: 40.0%");
    }

    #[test]
    fn reads_matching_field() {
        let mut state = AppState::default();
        state.sample = Sample { cpu_percent: 25.0, ram_percent: 40.0, ..Sample::default() };
        assert_eq!(GaugeKind::Cpu.value(&state), 25.0);
        assert_eq!(GaugeKind::Ram.value(&state), 40.0);
    }
}
