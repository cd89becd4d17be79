//! Lane and register abstractions shared by validation and the catalogue.

use std::fmt::Debug;

use super::backend::*;

/// A scalar that can occupy one vector lane.
///
/// Every implementor is plain old data: any bit pattern of `BYTES` bytes is
/// a valid value. Lanes are compared through [`Lane::to_bits`], never with
/// `==`, so `-0.0` and `+0.0` differ and NaNs compare by payload.
pub trait Lane: Copy + PartialEq + Debug + Default + Send + Sync + 'static {
    /// Size of the lane in bytes.
    const BYTES: usize;

    /// The lane's bit pattern, zero-extended to 64 bits.
    fn to_bits(self) -> u64;

    /// Rebuilds a lane from the low `BYTES` bytes of `bits`.
    fn from_bits(bits: u64) -> Self;
}

macro_rules! impl_int_lane {
    ($($t:ty => $unsigned:ty),* $(,)?) => {$(
        impl Lane for $t {
            const BYTES: usize = std::mem::size_of::<$t>();

            #[inline]
            fn to_bits(self) -> u64 {
                self as $unsigned as u64
            }

            #[inline]
            fn from_bits(bits: u64) -> Self {
                bits as $unsigned as $t
            }
        }
    )*};
}

impl_int_lane! {
    i8 => u8, i16 => u16, i32 => u32, i64 => u64,
    u8 => u8, u16 => u16, u32 => u32, u64 => u64,
}

impl Lane for f32 {
    const BYTES: usize = 4;

    #[inline]
    fn to_bits(self) -> u64 {
        f32::to_bits(self) as u64
    }

    #[inline]
    fn from_bits(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}

/// A vector register (or a tuple of registers) whose lanes can be read back.
pub trait Register: Copy {
    /// Scalar type of one lane.
    type Lane: Lane;

    /// Number of lanes, counting every register of a tuple.
    const LANES: usize;

    /// Materialises the lanes in memory order.
    fn lanes(self) -> Vec<Self::Lane>;

    /// Byte image of the register, lane by lane in little-endian order.
    fn to_bytes(self) -> Vec<u8> {
        let width = <Self::Lane as Lane>::BYTES;
        self.lanes()
            .into_iter()
            .flat_map(|lane| lane.to_bits().to_le_bytes().into_iter().take(width))
            .collect()
    }
}

macro_rules! impl_register {
    ($($vector:ident: [$lane:ty; $count:literal] => $store:ident;)*) => {$(
        impl Register for $vector {
            type Lane = $lane;
            const LANES: usize = $count;

            #[inline]
            fn lanes(self) -> Vec<$lane> {
                let mut out = vec![<$lane>::default(); $count];
                // SAFETY: `out` has room for exactly one register.
                unsafe { $store(out.as_mut_ptr(), self) };
                out
            }
        }
    )*};
}

impl_register! {
    int8x8_t: [i8; 8] => vst1_s8;
    int8x16_t: [i8; 16] => vst1q_s8;
    int16x4_t: [i16; 4] => vst1_s16;
    int16x8_t: [i16; 8] => vst1q_s16;
    int32x2_t: [i32; 2] => vst1_s32;
    int32x4_t: [i32; 4] => vst1q_s32;
    int64x1_t: [i64; 1] => vst1_s64;
    int64x2_t: [i64; 2] => vst1q_s64;
    uint8x8_t: [u8; 8] => vst1_u8;
    uint8x16_t: [u8; 16] => vst1q_u8;
    uint16x4_t: [u16; 4] => vst1_u16;
    uint16x8_t: [u16; 8] => vst1q_u16;
    uint32x2_t: [u32; 2] => vst1_u32;
    uint32x4_t: [u32; 4] => vst1q_u32;
    uint64x1_t: [u64; 1] => vst1_u64;
    uint64x2_t: [u64; 2] => vst1q_u64;
    float32x2_t: [f32; 2] => vst1_f32;
    float32x4_t: [f32; 4] => vst1q_f32;
}

macro_rules! impl_register_tuple {
    ($($tuple:ident: $vector:ident x $count:literal => [$($field:tt)+];)*) => {$(
        impl Register for $tuple {
            type Lane = <$vector as Register>::Lane;
            const LANES: usize = <$vector as Register>::LANES * $count;

            fn lanes(self) -> Vec<Self::Lane> {
                let mut out = Vec::with_capacity(Self::LANES);
                $( out.extend(self.$field.lanes()); )+
                out
            }
        }
    )*};
}

impl_register_tuple! {
    int8x8x2_t: int8x8_t x 2 => [0 1];
    int8x8x3_t: int8x8_t x 3 => [0 1 2];
    int8x8x4_t: int8x8_t x 4 => [0 1 2 3];
    int8x16x2_t: int8x16_t x 2 => [0 1];
    int16x4x2_t: int16x4_t x 2 => [0 1];
    int16x8x2_t: int16x8_t x 2 => [0 1];
    int32x2x2_t: int32x2_t x 2 => [0 1];
    int32x4x2_t: int32x4_t x 2 => [0 1];
    uint8x8x2_t: uint8x8_t x 2 => [0 1];
    uint8x8x3_t: uint8x8_t x 3 => [0 1 2];
    uint8x8x4_t: uint8x8_t x 4 => [0 1 2 3];
    uint8x16x2_t: uint8x16_t x 2 => [0 1];
    uint16x4x2_t: uint16x4_t x 2 => [0 1];
    uint16x8x2_t: uint16x8_t x 2 => [0 1];
    uint32x2x2_t: uint32x2_t x 2 => [0 1];
    uint32x4x2_t: uint32x4_t x 2 => [0 1];
    float32x2x2_t: float32x2_t x 2 => [0 1];
    float32x4x2_t: float32x4_t x 2 => [0 1];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_bits_round_trip() {
        assert_eq!((-1i8).to_bits(), 0xff);
        assert_eq!(<i8 as Lane>::from_bits(0x80), i8::MIN);
        assert_eq!((-2i32).to_bits(), 0xffff_fffe);
        assert_eq!(Lane::to_bits(-0.0f32), 0x8000_0000);
        assert_eq!(<f32 as Lane>::from_bits(0x3f80_0000), 1.0);
        assert_eq!(<u16 as Lane>::from_bits(0x1_2345), 0x2345);
    }

    #[test]
    fn test_register_lanes_follow_memory_order() {
        let data: [i16; 8] = [1, -2, 3, -4, 5, -6, 7, -8];
        let low = unsafe { vld1_s16(data.as_ptr()) };
        let full = unsafe { vld1q_s16(data.as_ptr()) };

        assert_eq!(low.lanes(), vec![1, -2, 3, -4]);
        assert_eq!(full.lanes(), data.to_vec());
        assert_eq!(<int16x8_t as Register>::LANES, 8);
    }

    #[test]
    fn test_register_bytes_are_little_endian_lanes() {
        let data: [u32; 2] = [0x0403_0201, 0x0807_0605];
        let v = unsafe { vld1_u32(data.as_ptr()) };
        assert_eq!(v.to_bytes(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_tuple_lanes_concatenate() {
        let a: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
        let b: [u8; 8] = [8, 9, 10, 11, 12, 13, 14, 15];
        let pair = unsafe { uint8x8x2_t(vld1_u8(a.as_ptr()), vld1_u8(b.as_ptr())) };

        assert_eq!(<uint8x8x2_t as Register>::LANES, 16);
        assert_eq!(pair.lanes(), (0..16).collect::<Vec<u8>>());
    }

    #[test]
    fn test_four_register_tuple_lanes_in_field_order() {
        let data: [i8; 32] = core::array::from_fn(|i| i as i8 - 16);
        let quad = unsafe {
            int8x8x4_t(
                vld1_s8(data.as_ptr()),
                vld1_s8(data[8..].as_ptr()),
                vld1_s8(data[16..].as_ptr()),
                vld1_s8(data[24..].as_ptr()),
            )
        };

        assert_eq!(<int8x8x4_t as Register>::LANES, 32);
        assert_eq!(quad.lanes(), data.to_vec());
        assert_eq!(quad.to_bytes(), data.iter().map(|&x| x as u8).collect::<Vec<_>>());
    }
}
