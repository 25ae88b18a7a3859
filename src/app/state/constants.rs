/// Wrap width used when flattening preview markup to text.
pub(crate) const PREVIEW_WRAP_COLUMNS: usize = 96;
/// Capacity of the channel carrying job events to the UI.
pub(crate) const JOB_EVENT_BUFFER: usize = 64;
/// How often the SIGINT flag is polled.
pub(crate) const SIGNAL_POLL_INTERVAL_MS: u64 = 250;
pub(crate) const PROGRESS_BAR_HEIGHT_PX: f32 = 14.0;
pub(crate) const PREVIEW_TEXT_SIZE_PX: f32 = 15.0;
