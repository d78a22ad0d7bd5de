pub mod batch;
pub mod codec;
pub mod decode;
pub mod encode;
pub mod levels;

pub use batch::decode_batch;
pub use codec::{PolylineCodec, PolylineCodecBuilder};
pub use decode::{CoordinateDecoder, decode_polyline};
pub use encode::encode_coordinates;
pub use levels::{decode_levels, encode_levels};
