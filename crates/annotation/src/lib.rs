pub mod map;
pub mod session;

pub use map::MapView;
pub use session::{DrawingSession, SessionError, SessionState};
