//! Injectable identifier generation
//!
//! Every freshly created entity (instance, API key) gets its id from an
//! [`IdGenerator`] owned by the store that creates it, so tests can swap in
//! a deterministic sequence instead of random v4 identifiers.

use std::sync::Arc;
use uuid::Uuid;

/// Source of unique identifiers for newly created entities
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Production generator: random version-4 identifiers
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Shared handle to an id generator
pub type SharedIds = Arc<dyn IdGenerator>;

/// Default shared generator
pub fn random() -> SharedIds {
    Arc::new(RandomIds)
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Deterministic generator yielding 00000000-0000-4000-8000-000000000001,
    /// ...-000000000002, and so on.
    #[derive(Debug, Default)]
    pub struct SequentialIds {
        counter: AtomicU64,
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> Uuid {
            let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
            Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0000u128 | n as u128)
        }
    }

    pub fn sequential() -> SharedIds {
        Arc::new(SequentialIds::default())
    }
}
