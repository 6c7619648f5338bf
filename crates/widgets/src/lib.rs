pub mod gauge;
pub mod network;
pub mod plot;

pub use gauge::{GaugeKind, GaugeWidget};
pub use network::NetworkWidget;
pub use plot::LinePlot;
