pub mod play;
pub mod session;

pub use play::PlayMode;
pub use session::{RepeatClock, Session};
