/// ProgressReporter port for user feedback during a run
///
/// Implementations decide what is shown; diagnostics go to `report`,
/// warnings about skipped dependencies go to `report_error`.
pub trait ProgressReporter {
    /// Reports a progress or diagnostic message
    fn report(&self, message: &str);

    /// Reports progress through a sequence of items
    ///
    /// # Arguments
    /// * `current` - Items finished so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
