//! Event handling and view synchronization for the till register.
//!
//! The [`Register`] owns the catalog and the running bill. The host UI
//! delivers [`UiEvent`]s to it one at a time; each event runs to completion,
//! mutates at most one store, and pushes re-rendered views back through the
//! host's [`Surface`].

mod config;
mod error;
mod event;
mod register;
mod surface;

pub use config::{CatalogSeed, RegisterConfig};
pub use error::RegisterError;
pub use event::UiEvent;
pub use register::Register;
pub use surface::{RecordedCall, RecordingSurface, Surface};
