//! Register types of the portable layer.
//!
//! Each type is a plain lane array carrying the name and lane layout of the
//! matching `core::arch::aarch64` type, so code written against the hardware
//! intrinsics compiles unchanged against this layer.

use std::array;

use super::kernel::Vector;

macro_rules! vector_types {
    ($($name:ident: [$elem:ty; $lanes:literal];)*) => {$(
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone, Debug, PartialEq)]
        pub struct $name(pub(crate) [$elem; $lanes]);

        impl Vector for $name {
            type Elem = $elem;
            const LANES: usize = $lanes;

            #[inline]
            fn from_fn(f: impl FnMut(usize) -> $elem) -> Self {
                $name(array::from_fn(f))
            }

            #[inline]
            fn lane(self, i: usize) -> $elem {
                self.0[i]
            }
        }
    )*};
}

vector_types! {
    int8x8_t: [i8; 8];
    int8x16_t: [i8; 16];
    int16x4_t: [i16; 4];
    int16x8_t: [i16; 8];
    int32x2_t: [i32; 2];
    int32x4_t: [i32; 4];
    int64x1_t: [i64; 1];
    int64x2_t: [i64; 2];
    uint8x8_t: [u8; 8];
    uint8x16_t: [u8; 16];
    uint16x4_t: [u16; 4];
    uint16x8_t: [u16; 8];
    uint32x2_t: [u32; 2];
    uint32x4_t: [u32; 4];
    uint64x1_t: [u64; 1];
    uint64x2_t: [u64; 2];
    float32x2_t: [f32; 2];
    float32x4_t: [f32; 4];
}

macro_rules! tuple_types {
    ($($name:ident = ($($vector:ident),+);)*) => {$(
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone, Debug, PartialEq)]
        pub struct $name($(pub $vector),+);
    )*};
}

tuple_types! {
    int8x8x2_t = (int8x8_t, int8x8_t);
    int8x8x3_t = (int8x8_t, int8x8_t, int8x8_t);
    int8x8x4_t = (int8x8_t, int8x8_t, int8x8_t, int8x8_t);
    int8x16x2_t = (int8x16_t, int8x16_t);
    int16x4x2_t = (int16x4_t, int16x4_t);
    int16x8x2_t = (int16x8_t, int16x8_t);
    int32x2x2_t = (int32x2_t, int32x2_t);
    int32x4x2_t = (int32x4_t, int32x4_t);
    uint8x8x2_t = (uint8x8_t, uint8x8_t);
    uint8x8x3_t = (uint8x8_t, uint8x8_t, uint8x8_t);
    uint8x8x4_t = (uint8x8_t, uint8x8_t, uint8x8_t, uint8x8_t);
    uint8x16x2_t = (uint8x16_t, uint8x16_t);
    uint16x4x2_t = (uint16x4_t, uint16x4_t);
    uint16x8x2_t = (uint16x8_t, uint16x8_t);
    uint32x2x2_t = (uint32x2_t, uint32x2_t);
    uint32x4x2_t = (uint32x4_t, uint32x4_t);
    float32x2x2_t = (float32x2_t, float32x2_t);
    float32x4x2_t = (float32x4_t, float32x4_t);
}
