pub mod error;
pub mod event;
pub mod state;

pub use error::{PulseError, Result};
pub use event::Message;
pub use state::{AppState, HistoryFrame, Sample, HISTORY_LEN};
