//! Native fixed-width integers that can seed an `Int` or be read back out of one.

use num_traits::{AsPrimitive, PrimInt, Signed, Unsigned};

use crate::limb::{Limb, Value};

/// A native unsigned integer of `BITS` bits: `u8`, `u16`, `u32`, `u64`, `u128` or `usize`.
///
/// Every such value has a multi-precision representation of at most
/// `ceil(BITS / Limb::BITS)` limbs.
pub trait FixedWidth: PrimInt + Unsigned + 'static {
	const BITS: usize;

	/// The low `Limb::BITS` bits.
	fn low_limb(self) -> Limb;

	/// Converts a limb, dropping the bits that don't fit into `Self`.
	fn from_limb(limb: Limb) -> Self;
}

impl<T> FixedWidth for T
where
	T: PrimInt + Unsigned + AsPrimitive<Value>,
	Value: AsPrimitive<T>,
{
	const BITS: usize = std::mem::size_of::<T>() * 8;

	#[inline]
	fn low_limb(self) -> Limb {
		Limb::from_masked(self.as_())
	}

	#[inline]
	fn from_limb(limb: Limb) -> Self {
		limb.0.as_()
	}
}

/// A native signed integer paired with the unsigned type of the same width.
pub trait SignedFixedWidth: PrimInt + Signed + 'static {
	type Unsigned: FixedWidth;

	/// `|self|`, exact even for `Self::MIN`.
	fn unsigned_abs(self) -> Self::Unsigned;

	/// Two's complement of `mag`, negated when `neg`. Wraps on overflow.
	fn from_magnitude(mag: Self::Unsigned, neg: bool) -> Self;
}

macro_rules! impl_signed_fixed_width {
	($($s:ty => $u:ty),* $(,)?) => {
		$(
			impl SignedFixedWidth for $s {
				type Unsigned = $u;

				#[inline]
				fn unsigned_abs(self) -> $u {
					<$s>::unsigned_abs(self)
				}

				#[inline]
				fn from_magnitude(mag: $u, neg: bool) -> Self {
					let val = mag as $s;
					if neg { val.wrapping_neg() } else { val }
				}
			}
		)*
	};
}

impl_signed_fixed_width! {
	i8 => u8,
	i16 => u16,
	i32 => u32,
	i64 => u64,
	i128 => u128,
	isize => usize,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_bits() {
		assert_eq!(<u8 as FixedWidth>::BITS, 8);
		assert_eq!(<u16 as FixedWidth>::BITS, 16);
		assert_eq!(<u32 as FixedWidth>::BITS, 32);
		assert_eq!(<u64 as FixedWidth>::BITS, 64);
		assert_eq!(<u128 as FixedWidth>::BITS, 128);
		assert_eq!(<usize as FixedWidth>::BITS, usize::BITS as usize);
	}

	#[test]
	fn test_low_limb() {
		assert_eq!(0xab_u8.low_limb(), Limb(0xab));
		assert_eq!(u64::MAX.low_limb(), Limb::MAX);
		assert_eq!(u128::MAX.low_limb(), Limb::MAX);
		assert_eq!((1_u64 << Limb::BITS).low_limb(), Limb::ZERO);
	}

	#[test]
	fn test_from_limb() {
		assert_eq!(u8::from_limb(Limb(0x1ff)), 0xff);
		assert_eq!(u16::from_limb(Limb(0x1_2345)), 0x2345);
		assert_eq!(u64::from_limb(Limb::MAX), Limb::MASK as u64);
	}

	#[test]
	fn test_signed() {
		assert_eq!(i8::MIN.unsigned_abs(), 128_u8);
		assert_eq!(SignedFixedWidth::unsigned_abs(-5_i64), 5_u64);
		assert_eq!(SignedFixedWidth::unsigned_abs(i128::MIN), 1_u128 << 127);

		assert_eq!(i8::from_magnitude(128, true), i8::MIN);
		assert_eq!(i8::from_magnitude(128, false), i8::MIN);
		assert_eq!(i32::from_magnitude(7, true), -7);
		assert_eq!(i64::from_magnitude(0, true), 0);
	}
}
