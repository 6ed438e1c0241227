use std::sync::Arc;

use merx_core::Clock;

/// Produces the human-facing order number for a new order.
pub trait OrderNumberGenerator: Send + Sync {
    fn next_number(&self) -> String;
}

/// Millisecond-timestamp numbers, e.g. `ORD-1735689600000`.
pub struct TimestampOrderNumbers {
    clock: Arc<dyn Clock>,
}

impl TimestampOrderNumbers {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl OrderNumberGenerator for TimestampOrderNumbers {
    fn next_number(&self) -> String {
        format!("ORD-{}", self.clock.now().timestamp_millis())
    }
}
