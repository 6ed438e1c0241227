//! `merx-core`: building blocks shared by every merx service.
//!
//! Error taxonomy, pagination envelope and the clock seam. Anything heavier
//! (HTTP clients, storage) lives in its own crate.

pub mod clock;
pub mod error;
pub mod page;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, ServiceResult, json_error};
pub use page::{Page, PageParams};
