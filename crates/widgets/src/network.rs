use pulse_core::{event::Message, state::AppState};
use pulse_system::format::format_rate;
use pulse_theme::Theme;
use iced::{widget::{row, text}, Alignment, Element};

/// Displays current upload / download rates.
#[derive(Debug, Default)]
pub struct NetworkWidget;

impl NetworkWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, state: &'a AppState, theme: &'a Theme) -> Element<'a, Message> {
        let up   = format!("Up: {}", format_rate(state.sample.net_sent_rate));
        let down = format!("Down: {}", format_rate(state.sample.net_recv_rate));

        row![
            text(up).size(theme.font_size).color(theme.sent_line.to_iced()),
            text(down).size(theme.font_size).color(theme.recv_line.to_iced()),
        ]
        .spacing(f32::from(theme.gap) * 2.0)
        .align_y(Alignment::Center)
        .into()
    }
}
