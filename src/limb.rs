#[cfg(not(feature = "digit-60"))]
mod config {
	pub type Value = u32;
	pub const BITS: usize = 28;
}

#[cfg(feature = "digit-60")]
mod config {
	pub type Value = u64;
	pub const BITS: usize = 60;
}

pub use config::Value;

// Leave headroom in the native word so that limb sums and carries never overflow it.
const _OK: () = assert!(config::BITS < Value::BITS as usize);

/// One digit of a multi-precision number, base `2**Limb::BITS`.
///
/// The value always fits in `Limb::BITS` bits. The remaining high bits of the native word
/// are zero.
#[derive(Clone, Copy, Default, PartialEq, Debug, Eq, Ord, PartialOrd, Hash)]
pub struct Limb(pub Value);

impl Limb {
	pub const BITS: usize = config::BITS;
	pub const MASK: Value = ((1 as Value) << Self::BITS) - 1;

	pub const ZERO: Limb = Self(0);
	pub const ONE: Limb = Self(1);
	pub const MAX: Limb = Self(Self::MASK);

	/// Keeps the low `Limb::BITS` bits of `value`.
	#[inline]
	pub const fn from_masked(value: Value) -> Limb {
		Limb(value & Self::MASK)
	}

	#[inline]
	pub const fn is_zero(self) -> bool {
		self.0 == 0
	}

	#[inline]
	pub const fn is_not_zero(self) -> bool {
		self.0 != 0
	}

	/// Returns number of bits needed to store the value.
	/// If the value is zero, it returns 0.
	#[inline]
	pub const fn bit_width(self) -> usize {
		(Value::BITS - self.0.leading_zeros()) as usize
	}
}

impl std::cmp::PartialEq<Value> for Limb {
	#[inline]
	fn eq(&self, other: &Value) -> bool {
		self.0 == *other
	}
}
