//! Output encoders.

mod ppm;

pub use ppm::{PpmDecoder, PpmEncoder, PpmHeader};
