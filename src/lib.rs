pub mod error;
pub mod generator;
pub mod record;
pub mod types;
pub mod vocab;
pub mod writer;
