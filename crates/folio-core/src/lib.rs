//! Presentational effects for a résumé page, independent of the browser.
//!
//! The web front end implements [`Dom`] and [`Scheduler`] over `web-sys` and
//! forwards events into [`PageFx`]; [`headless`] provides in-memory versions
//! of both for tests and tooling.

pub mod config;
pub mod constants;
pub mod controller;
pub mod dom;
pub mod error;
pub mod feedback;
pub mod headless;
pub mod lifecycle;
pub mod mobile_nav;
pub mod navbar;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod styles;
pub mod timer;

pub use config::FxConfig;
pub use controller::PageFx;
pub use dom::{Dom, Rect};
pub use error::DomError;
pub use reveal::{Intersection, Unobserve};
pub use timer::{Debounce, DoneLog, FrameGuard, Scheduler, Task, TimerBook, TimerId};
