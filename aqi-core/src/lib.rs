pub mod category;
pub mod error;
pub mod features;
pub mod predictor;
