pub mod converter;
pub mod generator;
pub mod numeral;

pub use crate::domain::model::{ConversionResult, GenerationRequest, NumberBase};
pub use crate::domain::ports::{ConfigProvider, RandomSource};
pub use crate::utils::error::Result;
pub use converter::convert;
pub use generator::generate;
