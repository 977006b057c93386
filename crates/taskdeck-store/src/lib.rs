//! Persistence backends for taskdeck.
//!
//! Both backends implement the same [`TaskStore`] contract: return the full
//! current set on fetch, apply one mutation at a time, and never hand back
//! partially-applied state. The backend is chosen once at startup through
//! [`create_store`]; nothing downstream branches on the mode again.

mod error;
mod local;
mod registry;
mod remote;
mod traits;

pub use error::{Error, Result};
pub use local::LocalStore;
pub use registry::{BackendMode, create_store};
pub use remote::RemoteStore;
pub use traits::TaskStore;
