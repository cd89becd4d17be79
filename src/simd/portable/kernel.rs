//! Lane-array plumbing shared by the intrinsic families.

/// Lane-array access shared by every register type.
pub(crate) trait Vector: Copy {
    type Elem: Copy;
    const LANES: usize;

    fn from_fn(f: impl FnMut(usize) -> Self::Elem) -> Self;
    fn lane(self, i: usize) -> Self::Elem;
}

/// Integer elements, with exact intermediate arithmetic in `i128`.
pub(crate) trait Element: Copy {
    const BITS: u32;

    fn widen(self) -> i128;
    /// Low `BITS` bits of `v`.
    fn wrap(v: i128) -> Self;
    /// `v` clamped to the element's range.
    fn saturate(v: i128) -> Self;
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {$(
        impl Element for $t {
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn widen(self) -> i128 {
                self as i128
            }

            #[inline]
            fn wrap(v: i128) -> Self {
                v as $t
            }

            #[inline]
            fn saturate(v: i128) -> Self {
                v.clamp(<$t>::MIN as i128, <$t>::MAX as i128) as $t
            }
        }
    )*};
}

impl_element!(i8, i16, i32, i64, u8, u16, u32, u64);

#[inline]
pub(crate) fn map<A: Vector, R: Vector>(a: A, f: impl Fn(A::Elem) -> R::Elem) -> R {
    R::from_fn(|i| f(a.lane(i)))
}

#[inline]
pub(crate) fn zip<A: Vector, B: Vector, R: Vector>(
    a: A,
    b: B,
    f: impl Fn(A::Elem, B::Elem) -> R::Elem,
) -> R {
    R::from_fn(|i| f(a.lane(i), b.lane(i)))
}

#[inline]
pub(crate) fn zip3<A: Vector, B: Vector, C: Vector, R: Vector>(
    a: A,
    b: B,
    c: C,
    f: impl Fn(A::Elem, B::Elem, C::Elem) -> R::Elem,
) -> R {
    R::from_fn(|i| f(a.lane(i), b.lane(i), c.lane(i)))
}

/// Lane `i` of the concatenation `a:b`.
#[inline]
pub(crate) fn joined<V: Vector>(a: V, b: V, i: usize) -> V::Elem {
    if i < V::LANES {
        a.lane(i)
    } else {
        b.lane(i - V::LANES)
    }
}

/// Reads one register from unaligned memory.
///
/// # Safety
///
/// `ptr` must be valid for reads of `V::LANES` elements.
#[inline]
pub(crate) unsafe fn load<V: Vector>(ptr: *const V::Elem) -> V {
    V::from_fn(|i| ptr.add(i).read_unaligned())
}

/// Writes one register to unaligned memory.
///
/// # Safety
///
/// `ptr` must be valid for writes of `V::LANES` elements.
#[inline]
pub(crate) unsafe fn store<V: Vector>(ptr: *mut V::Elem, v: V) {
    for i in 0..V::LANES {
        ptr.add(i).write_unaligned(v.lane(i));
    }
}

/// Adjacent lanes of `a:b` folded pairwise into one register.
#[inline]
pub(crate) fn pairwise<V: Vector>(a: V, b: V, f: impl Fn(V::Elem, V::Elem) -> V::Elem) -> V {
    V::from_fn(|i| f(joined(a, b, 2 * i), joined(a, b, 2 * i + 1)))
}

/// Adjacent lanes of `a` folded into one (usually wider) lane each.
#[inline]
pub(crate) fn pairs<A: Vector, R: Vector>(a: A, f: impl Fn(A::Elem, A::Elem) -> R::Elem) -> R {
    R::from_fn(|i| f(a.lane(2 * i), a.lane(2 * i + 1)))
}

/// All ones when `pred` holds, all zeros otherwise.
#[inline]
pub(crate) fn mask<T: Element>(pred: bool) -> T {
    T::wrap(if pred { -1 } else { 0 })
}

/// Raw lane bits, zero-extended to 64 bits.
pub(crate) trait Bits: Copy {
    fn to_raw(self) -> u64;
    fn from_raw(raw: u64) -> Self;
}

macro_rules! impl_bits {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl Bits for $t {
            #[inline]
            fn to_raw(self) -> u64 {
                self as $u as u64
            }

            #[inline]
            fn from_raw(raw: u64) -> Self {
                raw as $u as $t
            }
        }
    )*};
}

impl_bits!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, u8 => u8, u16 => u16, u32 => u32, u64 => u64);

impl Bits for f32 {
    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits() as u64
    }

    #[inline]
    fn from_raw(raw: u64) -> Self {
        f32::from_bits(raw as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::portable::types::*;

    #[test]
    fn test_joined_and_pairwise_walk_both_registers() {
        let a = int16x4_t([1, 2, 3, 4]);
        let b = int16x4_t([10, 20, 30, 40]);
        assert_eq!(joined(a, b, 3), 4);
        assert_eq!(joined(a, b, 4), 10);

        let sums: int16x4_t = pairwise(a, b, |x, y| x + y);
        assert_eq!(sums, int16x4_t([3, 7, 30, 70]));
    }

    #[test]
    fn test_pairs_widen() {
        let a = uint8x8_t([255, 255, 1, 2, 3, 4, 0, 9]);
        let r: uint16x4_t = pairs(a, |x, y| x as u16 + y as u16);
        assert_eq!(r, uint16x4_t([510, 3, 7, 9]));
    }

    #[test]
    fn test_element_wrap_and_saturate() {
        assert_eq!(<i8 as Element>::wrap(200), -56);
        assert_eq!(<i8 as Element>::saturate(200), 127);
        assert_eq!(<u16 as Element>::saturate(-5), 0);
        assert_eq!(<u64 as Element>::wrap(-1), u64::MAX);
        assert_eq!(mask::<u32>(true), u32::MAX);
        assert_eq!(mask::<i16>(false), 0);
    }

    #[test]
    fn test_unaligned_load_store() {
        let bytes: [u8; 17] = std::array::from_fn(|i| i as u8);
        let v: uint8x16_t = unsafe { load(bytes[1..].as_ptr()) };
        assert_eq!(v.lane(0), 1);
        assert_eq!(v.lane(15), 16);

        let mut out = [0u8; 17];
        unsafe { store(out[1..].as_mut_ptr(), v) };
        assert_eq!(&out[1..], &bytes[1..]);
        assert_eq!(out[0], 0);
    }
}
