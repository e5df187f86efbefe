//! Domain events raised by the membership core.

mod event_emitter;

pub use event_emitter::{
    BroadcastEventEmitter, EventEmitter, NullEventEmitter, UserLoggedIn, DEFAULT_EVENT_CAPACITY,
};

#[cfg(any(test, feature = "test-utils"))]
pub use event_emitter::MockEventEmitter;
