use core::fmt::Debug;

/// A fixed-width integer usable as a key of [`IntMap`](crate::IntMap).
///
/// Keys are compared by the implementing type's own equality, which for primitive integers is
/// equality of the raw bit pattern at that width. The all-zero pattern marks an empty slot, so
/// the map keeps the entry for [`IntKey::ZERO`] outside of its slot array.
///
/// Implemented for every primitive signed and unsigned integer up to 64 bits wide.
pub trait IntKey: Copy + Eq + Default + Debug {
    /// The reserved empty-slot pattern.
    const ZERO: Self;

    /// Widens the key to the signed machine word fed to the hash mix.
    ///
    /// Signed types sign-extend, unsigned types zero-extend, and 64-bit unsigned values are
    /// reinterpreted bit for bit.
    fn to_word(self) -> i64;

    #[inline(always)]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_int_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntKey for $ty {
                const ZERO: Self = 0;

                #[inline(always)]
                fn to_word(self) -> i64 {
                    self as i64
                }
            }
        )*
    };
}

impl_int_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
