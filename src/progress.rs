// src/progress.rs
/// Lightweight progress reporting for the bulk update.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of rows to refresh.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One row was re-scraped.
    fn item_done(&mut self, _position: usize, _code: &str) {}

    /// One row could not be re-scraped; the run stops here.
    fn item_failed(&mut self, _position: usize, _code: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
