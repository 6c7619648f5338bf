/// Messages that flow from background sources into the application.
///
/// Sources:
/// - Sampling timer      → `Tick`
/// - Config watcher task → `ConfigReloaded`
#[derive(Debug, Clone)]
pub enum Message {
    /// Sampling timer fired — take one sample.
    Tick,
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,
}
