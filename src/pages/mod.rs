/// Route load functions: run before a page renders, may redirect.
pub mod cookies;
pub mod counter;
pub mod guard;
pub mod user;

pub use cookies::Cookies;
pub use counter::CounterData;
pub use guard::{Access, GuardOutcome, LoadGuard, Redirect, Session};
pub use user::PageLoad;
