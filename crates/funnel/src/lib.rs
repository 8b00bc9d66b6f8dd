pub mod admin;
pub mod capture;
pub mod runtime;
pub mod session;
pub mod sync;
pub mod vault;

pub use runtime::FunnelRuntime;
pub use session::{Session, SessionError, Stage};
