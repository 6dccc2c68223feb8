pub mod codec;
pub mod geometry;

pub use codec::{decode_png, encode_png, read_png, write_png};
pub use geometry::{
    check_scale_factor, mirror_horizontal, mirror_vertical, rotate90, scale, translate,
    TRANSPARENT,
};
