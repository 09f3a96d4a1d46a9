/// Records shorter than this cannot hold a valid record and are skipped
/// without parsing. The last line of a stream is often empty or truncated.
pub const MIN_LINE_LEN: usize = 4;
pub const PROGRESS_TICK_EVERY: u64 = 25_000;
pub const PROGRESS_MILESTONE_EVERY: u64 = 1_000_000;
/// Decoded lines per message between the reader thread and the fold loop.
pub const BATCH_SIZE: usize = 1024;
/// Batches in flight before the reader thread blocks.
pub const CHANNEL_CAPACITY: usize = 64;
