pub mod panel;
pub mod session;

pub use panel::Panel;
pub use session::{Flow, Session, SessionCommand};
