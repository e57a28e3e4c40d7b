pub mod contact;
pub mod tags;
pub mod words;
