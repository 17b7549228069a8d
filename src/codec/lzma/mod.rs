mod decoder;
mod encoder;

pub use self::{decoder::LzmaDecoder, encoder::LzmaEncoder};
