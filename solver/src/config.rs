//! Named constants for the search, pulled out of the driver so tuning them
//! doesn't mean hunting through the IDA* loop.

/// Iterative-deepening gives up once the bound climbs past this many total
/// moves without a win — past this point a deal is treated as unsolved.
pub const MAX_DEPTH: i32 = 256;

/// Starting capacity for the move arena's backing store; it grows past this
/// automatically, but most deals stay within it.
pub const ARENA_INITIAL_CAPACITY: usize = 1 << 16;

/// Starting capacity for the fingerprint table.
pub const FINGERPRINT_INITIAL_CAPACITY: usize = 1 << 16;
