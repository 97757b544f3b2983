mod encoding;
mod normalize;

pub use encoding::{decode_import_name, encode_import_name};
pub use normalize::{normalize_value, normalize_width};
