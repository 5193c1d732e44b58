//! Game engine
//!
//! Leaves first: shuffle, panel builder, match engine, timer and scheduler,
//! tied together by the session controller.

mod matcher;
mod panel;
mod scheduler;
mod session;
mod shuffle;
mod timer;

pub use matcher::{ClickOutcome, MatchEngine};
pub use panel::build_round;
pub use scheduler::{Continuation, Due, RoundId, Scheduler};
pub use session::{
    COMPLETE_NOTICE_DELAY, GameError, ImportError, REVERT_DELAY, RESOLVE_DELAY, Session,
    SessionEvent,
};
pub use shuffle::shuffled;
pub use timer::{TICK_PERIOD, Timer};
