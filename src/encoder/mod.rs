pub mod fountain_encoder;

pub use fountain_encoder::{encode, encode_body};
