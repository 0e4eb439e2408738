//! The period scheduler (component D). Three independent schedules —
//! voting, historic stamping and the slash window — are each driven by the
//! same predicate against the current block height, so whether any of them
//! fires this block is a pure function with no hidden state.

/// True on the last block of a period of length `period_len`, i.e. the
/// block whose successor starts a new period. A `period_len` of zero never
/// fires, rather than panicking on the modulo.
pub fn is_period_last_block(height: u64, period_len: u64) -> bool {
    period_len != 0 && (height + 1) % period_len == 0
}
