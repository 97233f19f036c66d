pub mod classify;
pub mod engine;
pub mod input;
pub mod ranges;
pub mod registry;
pub mod selection;
pub mod sweep;

pub use crate::domain::model::{Band, LengthRange, Report, Summary, Verdict};
pub use crate::domain::ports::{ConfigProvider, ReportRenderer, Storage};
pub use crate::utils::error::Result;
