//! Time-series line plot drawn on an Iced canvas.
//!
//! Samples are laid out oldest-left to newest-right across the full width;
//! the newest sample sits on the right edge, matching an x-axis of
//! `-(n-1) ..= 0` seconds.

use pulse_core::event::Message;
use pulse_theme::{Color, Theme};
use iced::{
    mouse,
    widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
    Element, Length, Pixels, Point, Rectangle, Renderer, Size,
};

/// Space reserved above the plot area for the title and legend.
const HEADER: f32 = 20.0;

/// One named line on a plot.
#[derive(Debug, Clone)]
struct Series {
    name:   &'static str,
    values: Vec<f64>,
    color:  Color,
}

/// Line plot of one or more series sharing a Y axis starting at zero.
#[derive(Debug, Clone)]
pub struct LinePlot {
    title:  String,
    series: Vec<Series>,
    /// Upper bound of the Y axis.
    y_max:  f64,
    legend: bool,
    text:   Color,
    grid:   Color,
}

impl LinePlot {
    pub fn new(title: impl Into<String>, theme: &Theme) -> Self {
        Self {
            title:  title.into(),
            series: Vec::new(),
            y_max:  1.0,
            legend: false,
            text:   theme.foreground,
            grid:   theme.grid(),
        }
    }

    #[must_use]
    pub fn series(mut self, name: &'static str, values: Vec<f64>, color: Color) -> Self {
        self.series.push(Series { name, values, color });
        self
    }

    /// Fixed Y axis `0 ..= max`.
    #[must_use]
    pub fn y_range(mut self, max: f64) -> Self {
        self.y_max = max;
        self
    }

    /// Y axis rounded up from the window's `peak` value.
    #[must_use]
    pub fn scaled_to(mut self, peak: f64) -> Self {
        self.y_max = nice_ceiling(peak);
        self
    }

    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    pub fn view<'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Round `value` up to 1, 2 or 5 times a power of ten; never below 1.
fn nice_ceiling(value: f64) -> f64 {
    if !(value > 1.0) {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|bound| *bound >= value)
        .unwrap_or(10.0 * magnitude)
}

/// Map samples into `area`, oldest at the left edge, newest at the right.
fn layout_points(values: &[f64], area: Rectangle, y_max: f64) -> Vec<Point> {
    let n = values.len();
    if n == 0 || y_max <= 0.0 {
        return Vec::new();
    }
    let step = if n > 1 { area.width / (n - 1) as f32 } else { 0.0 };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let ratio = (v / y_max).clamp(0.0, 1.0) as f32;
            Point::new(
                area.x + step * i as f32,
                area.y + area.height * (1.0 - ratio),
            )
        })
        .collect()
}

impl canvas::Program<Message> for LinePlot {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let y_max = self.y_max;

        let area = Rectangle::new(
            Point::new(0.0, HEADER),
            Size::new(bounds.width, (bounds.height - HEADER).max(0.0)),
        );

        // Frame and a mid-height guide line.
        let outline = Path::rectangle(area.position(), area.size());
        let grid = Stroke::default().with_color(self.grid.to_iced()).with_width(1.0);
        frame.stroke(&outline, grid.clone());
        let mid_y = area.y + area.height / 2.0;
        frame.stroke(
            &Path::line(Point::new(area.x, mid_y), Point::new(area.x + area.width, mid_y)),
            grid,
        );

        frame.fill_text(canvas::Text {
            content:  format!("{}  (max {})", self.title, trim_number(y_max)),
            position: Point::new(2.0, 2.0),
            color:    self.text.to_iced(),
            size:     Pixels(13.0),
            ..Default::default()
        });

        for (idx, series) in self.series.iter().enumerate() {
            let points = layout_points(&series.values, area, y_max);
            if let Some((first, rest)) = points.split_first() {
                let line = Path::new(|b| {
                    b.move_to(*first);
                    for p in rest {
                        b.line_to(*p);
                    }
                });
                frame.stroke(
                    &line,
                    Stroke::default().with_color(series.color.to_iced()).with_width(1.5),
                );
            }

            if self.legend {
                frame.fill_text(canvas::Text {
                    content:  series.name.to_string(),
                    position: Point::new(bounds.width - 60.0 * (idx + 1) as f32, 2.0),
                    color:    series.color.to_iced(),
                    size:     Pixels(13.0),
                    ..Default::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }
}

fn trim_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(100.0, 50.0))
    }

    #[test]
    fn nice_ceiling_steps() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(f64::NAN), 1.0);
        assert_eq!(nice_ceiling(1.5), 2.0);
        assert_eq!(nice_ceiling(3.0), 5.0);
        assert_eq!(nice_ceiling(7.0), 10.0);
        assert_eq!(nice_ceiling(120.0), 200.0);
    }

    #[test]
    fn points_span_full_width_newest_on_right() {
        let pts = layout_points(&[0.0, 50.0, 100.0], area(), 100.0);
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], Point::new(0.0, 50.0));
        assert_eq!(pts[1], Point::new(50.0, 25.0));
        assert_eq!(pts[2], Point::new(100.0, 0.0));
    }

    #[test]
    fn values_above_range_are_pinned_to_top() {
        let pts = layout_points(&[250.0], area(), 100.0);
        assert_eq!(pts[0].y, 0.0);
    }

    #[test]
    fn scale_follows_peak() {
        let plot = LinePlot::new("Network (KB/s)", &Theme::default())
            .series("Sent", vec![0.0, 3.2], Color::YELLOW)
            .scaled_to(3.2);
        assert_eq!(plot.y_max, 5.0);
    }

    #[test]
    fn quiet_network_keeps_unit_scale() {
        let plot = LinePlot::new("Network (KB/s)", &Theme::default()).scaled_to(0.0);
        assert_eq!(plot.y_max, 1.0);
    }

    #[test]
    fn fixed_range_is_kept() {
        let plot = LinePlot::new("CPU (%)", &Theme::default())
            .y_range(100.0)
            .series("CPU", vec![250.0], Color::LINE);
        assert_eq!(plot.y_max, 100.0);
    }

    #[test]
    fn trims_whole_numbers() {
        assert_eq!(trim_number(100.0), "100");
        assert_eq!(trim_number(0.5), "0.5");
    }
}
