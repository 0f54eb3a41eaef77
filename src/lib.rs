//! Multi-precision integers stored as base `2**Limb::BITS` digits.
//!
//! This crate contains the number representation and the routines that seed it from (and
//! read it back into) native fixed-width integers. Arithmetic lives elsewhere.
#![allow(non_snake_case)]

pub mod error;
pub mod limb;
pub mod limb_buf;
pub mod ll;
pub mod width;

pub use error::{Error, ErrorKind};
pub use limb::Limb;
pub use width::{FixedWidth, SignedFixedWidth};

use error::assert;
use limb_buf::LimbBuf;

#[cfg(test)]
#[macro_export]
macro_rules! testvec {
	($($x:expr),* $(,)?) => {{
		let v: Vec<$crate::limb::Limb> = vec![$($crate::limb::Limb($x)),*];
		v
	}};
}

#[cfg(test)]
pub(crate) fn init_test_logging() {
	static INIT: std::sync::Once = std::sync::Once::new();
	INIT.call_once(|| {
		let _ = stderrlog::new().module(module_path!()).verbosity(4usize).init();
	});
}

/// Arbitrary-precision integer.
///
/// The magnitude is stored in `buf[..used]`, least significant limb first. The number is
/// always normalized: either `used == 0` (the value zero, never negative) or the limb
/// `buf[used - 1]` is non-zero. Slots in `buf[used..]` are spare capacity.
#[derive(Clone, Default)]
pub struct Int {
	buf: LimbBuf,
	used: usize,
	neg: bool,
}

impl Int {
	/// Zero. Doesn't allocate.
	pub fn new() -> Self {
		Self { buf: LimbBuf::new(), used: 0, neg: false }
	}

	/// Zero, with room for `n` limbs.
	pub fn with_capacity(n: usize) -> Result<Self, Error> {
		Ok(Self { buf: LimbBuf::with_capacity(n)?, used: 0, neg: false })
	}

	pub fn from_unsigned<T: FixedWidth>(v: T) -> Result<Self, Error> {
		let mut r = Self::new();
		r.set_from_unsigned(v)?;
		Ok(r)
	}

	pub fn from_signed<T: SignedFixedWidth>(v: T) -> Result<Self, Error> {
		let mut r = Self::new();
		r.set_from_signed(v)?;
		Ok(r)
	}

	pub fn is_zero(&self) -> bool {
		self.used == 0
	}

	pub fn is_negative(&self) -> bool {
		self.neg
	}

	pub fn is_positive(&self) -> bool {
		!self.is_zero() && !self.neg
	}

	/// Number of limbs in use.
	pub fn used(&self) -> usize {
		self.used
	}

	/// Number of allocated limb slots.
	pub fn capacity(&self) -> usize {
		self.buf.cap()
	}

	/// The magnitude, least significant limb first. The top limb (if any) is non-zero.
	pub fn limbs(&self) -> &[Limb] {
		&self.buf[..self.used]
	}

	/// All allocated slots, for routines that build a result in place.
	/// Finish with `set_used()`.
	pub fn limbs_mut(&mut self) -> &mut [Limb] {
		&mut self.buf
	}

	pub fn bit_width(&self) -> usize {
		ll::bit_width(self.limbs())
	}

	/// Makes room for at least `n` limbs. The value doesn't change.
	pub fn grow(&mut self, n: usize) -> Result<(), Error> {
		self.buf.ensure(n)
	}

	/// Returns spare capacity to the allocator. The value doesn't change.
	pub fn shrink(&mut self) {
		self.buf.shrink_to(self.used);
	}

	/// Sets the value to zero. Keeps the capacity.
	pub fn zero(&mut self) {
		self.__commit(0, false);
	}

	/// Trims high zero limbs. Zero loses its sign.
	pub fn clamp(&mut self) {
		self.used = ll::trim(&self.buf, self.used);
		if self.used == 0 {
			self.neg = false;
		}
	}

	/// Declares that `limbs_mut()[..used]` holds the magnitude and normalizes the number.
	/// Every written limb must be at most `Limb::MAX`.
	#[must_use]
	pub fn set_used(&mut self, used: usize, neg: bool) -> Result<(), Error> {
		assert(used <= self.buf.cap(), || Error::new_buffer_too_small("Int::set_used()"))?;
		debug_assert!(self.buf[..used].iter().all(|l| *l <= Limb::MAX));

		self.used = used;
		self.neg = neg;
		self.clamp();
		Ok(())
	}

	/// Overwrites the value with `v`.
	///
	/// Makes sure there is room for `ceil(T::BITS / Limb::BITS)` limbs. Capacity left over
	/// from an earlier, larger value is kept. If the allocation fails, the previous value
	/// is left untouched.
	#[inline(never)]
	#[must_use]
	pub fn set_from_unsigned<T: FixedWidth>(&mut self, v: T) -> Result<(), Error> {
		self.buf.ensure(ll::limbs_for_bits(T::BITS))?;
		let used = ll::write_unsigned(&mut self.buf, v)?;
		self.__commit(used, false);
		Ok(())
	}

	/// Overwrites the value with `v`. Negative only if `v < 0`.
	#[must_use]
	pub fn set_from_signed<T: SignedFixedWidth>(&mut self, v: T) -> Result<(), Error> {
		self.set_from_unsigned(v.unsigned_abs())?;
		self.neg = v.is_negative() && self.used != 0;
		Ok(())
	}

	/// Returns the low `T::BITS` bits of the magnitude. The sign is ignored.
	pub fn get_mag<T: FixedWidth>(&self) -> T {
		ll::read_unsigned(self.limbs())
	}

	/// Returns the low `T::BITS` bits of the value in two's complement.
	pub fn get_signed<T: SignedFixedWidth>(&self) -> T {
		T::from_magnitude(self.get_mag(), self.neg)
	}

	fn __commit(&mut self, used: usize, neg: bool) {
		debug_assert!(used <= self.buf.cap());
		debug_assert!(used == 0 || self.buf[used - 1].is_not_zero());

		// Don't leave digits of the previous value lying around in the spare slots.
		self.buf[used..].fill(Limb::ZERO);
		self.used = used;
		self.neg = neg && used != 0;
	}
}

/// Compares values. Capacity is not part of the value.
impl PartialEq for Int {
	fn eq(&self, other: &Self) -> bool {
		self.neg == other.neg && self.limbs() == other.limbs()
	}
}

impl Eq for Int {}

impl std::fmt::Debug for Int {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Int")
			.field("neg", &self.neg)
			.field("limbs", &self.limbs())
			.field("cap", &self.capacity())
			.finish()
	}
}
