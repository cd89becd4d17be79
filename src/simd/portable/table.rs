//! Byte table lookup over one to four registers.
//!
//! Each index lane selects a byte of the concatenated tables. Indices past
//! the end of the table select 0 (`vtbl*`) or keep the lane of the first
//! operand (`vtbx*`). Signed indices are taken as unsigned bytes, so a
//! negative index is always out of range.

use super::kernel::*;
use super::types::*;

fn lookup<V: Vector>(tables: &[V], index: V, fallback: V) -> V
where
    V::Elem: Bits,
{
    let len = tables.len() * V::LANES;
    V::from_fn(|i| {
        let j = index.lane(i).to_raw() as usize;
        if j < len {
            tables[j / V::LANES].lane(j % V::LANES)
        } else {
            fallback.lane(i)
        }
    })
}

fn zeroed<V: Vector>() -> V
where
    V::Elem: Bits,
{
    V::from_fn(|_| Bits::from_raw(0))
}

macro_rules! table_lookup {
    ($($tbl:ident, $tbx:ident: $ty:ident;)*) => {$(
        #[inline]
        pub fn $tbl(a: $ty, b: $ty) -> $ty {
            lookup(&[a], b, zeroed())
        }

        #[inline]
        pub fn $tbx(a: $ty, b: $ty, c: $ty) -> $ty {
            lookup(&[b], c, a)
        }
    )*};
    ($($tbl:ident, $tbx:ident: $table:ident => $ty:ident [$($field:tt)+];)*) => {$(
        #[inline]
        pub fn $tbl(a: $table, b: $ty) -> $ty {
            lookup(&[$(a.$field),+], b, zeroed())
        }

        #[inline]
        pub fn $tbx(a: $ty, b: $table, c: $ty) -> $ty {
            lookup(&[$(b.$field),+], c, a)
        }
    )*};
}

table_lookup! {
    vtbl1_s8, vtbx1_s8: int8x8_t;
    vtbl1_u8, vtbx1_u8: uint8x8_t;
}

table_lookup! {
    vtbl2_s8, vtbx2_s8: int8x8x2_t => int8x8_t [0 1];
    vtbl2_u8, vtbx2_u8: uint8x8x2_t => uint8x8_t [0 1];
    vtbl3_s8, vtbx3_s8: int8x8x3_t => int8x8_t [0 1 2];
    vtbl3_u8, vtbx3_u8: uint8x8x3_t => uint8x8_t [0 1 2];
    vtbl4_s8, vtbx4_s8: int8x8x4_t => int8x8_t [0 1 2 3];
    vtbl4_u8, vtbx4_u8: uint8x8x4_t => uint8x8_t [0 1 2 3];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_indices_are_out_of_range() {
        let table = int8x8_t([0, -1, 2, -3, 4, -5, 6, -7]);
        let index = int8x8_t([7, -1, 0, 8, -128, 1, 3, 127]);
        let fallback = int8x8_t([50; 8]);

        assert_eq!(vtbl1_s8(table, index), int8x8_t([-7, 0, 0, 0, 0, -1, -3, 0]));
        assert_eq!(
            vtbx1_s8(fallback, table, index),
            int8x8_t([-7, 50, 0, 50, 50, -1, -3, 50])
        );
    }

    #[test]
    fn test_four_register_table() {
        let tables = uint8x8x4_t(
            uint8x8_t([0, 1, 2, 3, 4, 5, 6, 7]),
            uint8x8_t([8, 9, 10, 11, 12, 13, 14, 15]),
            uint8x8_t([16, 17, 18, 19, 20, 21, 22, 23]),
            uint8x8_t([24, 25, 26, 27, 28, 29, 30, 31]),
        );
        let index = uint8x8_t([31, 0, 15, 16, 32, 255, 9, 24]);
        assert_eq!(
            vtbl4_u8(tables, index),
            uint8x8_t([31, 0, 15, 16, 0, 0, 9, 24])
        );
        assert_eq!(
            vtbx4_u8(uint8x8_t([99; 8]), tables, index),
            uint8x8_t([31, 0, 15, 16, 99, 99, 9, 24])
        );
    }
}
