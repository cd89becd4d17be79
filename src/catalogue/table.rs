//! Byte table lookups. Tables are read from the integer window (up to 32
//! bytes); index lanes come from the float window reduced into a range a
//! little wider than the table, so most lanes hit and some miss. The last
//! index is always out of range, and for signed lookups that lane is
//! negative.

use super::*;
use crate::simd::backend::*;

/// Index bytes for a table of `len` bytes.
fn indices(fx: &Fixture, len: usize) -> [u8; 8] {
    let raw = float_a::<u8>(fx);
    let mut index = [0u8; 8];
    for (i, slot) in index.iter_mut().enumerate() {
        *slot = (raw[i] as usize % (len + 8)) as u8;
    }
    index[7] = 0xff;
    index
}

fn lookup<T: Lane>(table: &[T], index: &[T], fallback: &[T]) -> Vec<T> {
    index
        .iter()
        .zip(fallback)
        .map(|(&j, &keep)| {
            let j = j.to_bits() as usize;
            if j < table.len() {
                table[j]
            } else {
                keep
            }
        })
        .collect()
}

/// One register, or a tuple of consecutive registers.
macro_rules! table_operand {
    ($load:ident, $table:ident, single []) => {
        $load($table.as_ptr())
    };
    ($load:ident, $table:ident, $tuple:ident [$($field:tt)+]) => {
        $tuple($($load($table.as_ptr().add(8 * $field))),+)
    };
}
/// `$tbl(table, index)` and `$tbx(fallback, table, index)` over
/// `$count` consecutive 8-byte tables.
macro_rules! table_tests {
    ($($tbl_test:ident, $tbx_test:ident = $tbl:ident, $tbx:ident:
        $load:ident x $count:literal => $tuple:ident [$($field:tt)*], $t:ty;)*) => {$(
        pub fn $tbl_test(fx: &Fixture) -> Outcome {
            let table = &fx.ints().whole::<$t>()[..8 * $count];
            let index: [$t; 8] = indices(fx, 8 * $count).map(|j| <$t as Lane>::from_bits(j as u64));
            let zeros = [<$t>::default(); 8];
            // SAFETY: `table` holds `$count` registers and `index` one.
            let r = unsafe { $tbl(table_operand!($load, table, $tuple [$($field)*]), $load(index.as_ptr())) };
            validate(r, &lookup(table, &index, &zeros)).into()
        }

        pub fn $tbx_test(fx: &Fixture) -> Outcome {
            let table = &fx.ints().whole::<$t>()[..8 * $count];
            let index: [$t; 8] = indices(fx, 8 * $count).map(|j| <$t as Lane>::from_bits(j as u64));
            let fallback = float_b::<$t>(fx);
            // SAFETY: `table` holds `$count` registers, `index` and `fallback` one each.
            let r = unsafe {
                $tbx(
                    $load(fallback.as_ptr()),
                    table_operand!($load, table, $tuple [$($field)*]),
                    $load(index.as_ptr()),
                )
            };
            validate(r, &lookup(table, &index, fallback)).into()
        }
    )*};
}

table_tests! {
    test_vtbl1_s8, test_vtbx1_s8 = vtbl1_s8, vtbx1_s8: vld1_s8 x 1 => single [], i8;
    test_vtbl1_u8, test_vtbx1_u8 = vtbl1_u8, vtbx1_u8: vld1_u8 x 1 => single [], u8;
    test_vtbl2_s8, test_vtbx2_s8 = vtbl2_s8, vtbx2_s8: vld1_s8 x 2 => int8x8x2_t [0 1], i8;
    test_vtbl2_u8, test_vtbx2_u8 = vtbl2_u8, vtbx2_u8: vld1_u8 x 2 => uint8x8x2_t [0 1], u8;
    test_vtbl3_s8, test_vtbx3_s8 = vtbl3_s8, vtbx3_s8: vld1_s8 x 3 => int8x8x3_t [0 1 2], i8;
    test_vtbl3_u8, test_vtbx3_u8 = vtbl3_u8, vtbx3_u8: vld1_u8 x 3 => uint8x8x3_t [0 1 2], u8;
    test_vtbl4_s8, test_vtbx4_s8 = vtbl4_s8, vtbx4_s8: vld1_s8 x 4 => int8x8x4_t [0 1 2 3], i8;
    test_vtbl4_u8, test_vtbx4_u8 = vtbl4_u8, vtbx4_u8: vld1_u8 x 4 => uint8x8x4_t [0 1 2 3], u8;
}
