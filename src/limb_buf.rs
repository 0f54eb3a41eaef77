use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use crate::Error;
use crate::error::assert;
use crate::limb::Limb;

/// Up to this many limbs are stored inline, without a heap allocation.
/// Three 28-bit limbs are enough for any 64-bit value.
pub const INLINE_LIMBS: usize = 3;

/// Backing storage for the limbs of a number.
///
/// `cap()` slots are available for reading and writing. Growing never moves values around
/// within the slots and new slots start out as zero.
#[derive(Clone, Default)]
pub struct LimbBuf {
	limbs: SmallVec<[Limb; INLINE_LIMBS]>,
}

impl LimbBuf {
	pub const MAX_LIMBS: usize = isize::MAX as usize / std::mem::size_of::<Limb>();

	/// Empty buffer. Doesn't allocate.
	pub fn new() -> Self {
		Self { limbs: SmallVec::new() }
	}

	pub fn with_capacity(n: usize) -> Result<Self, Error> {
		let mut buf = Self::new();
		buf.ensure(n)?;
		Ok(buf)
	}

	#[inline]
	pub fn cap(&self) -> usize {
		self.limbs.len()
	}

	/// True when the limbs live in the heap.
	pub fn is_spilled(&self) -> bool {
		self.limbs.spilled()
	}

	/// Makes sure at least `n` slots are available. Existing slots are kept as they are.
	#[inline]
	pub fn ensure(&mut self, n: usize) -> Result<(), Error> {
		if n <= self.cap() {
			return Ok(());
		}
		self.__grow(n)
	}

	#[inline(never)]
	fn __grow(&mut self, n: usize) -> Result<(), Error> {
		let cap = self.cap();
		debug_assert!(n > cap);

		assert(n <= Self::MAX_LIMBS, || {
			Error::new_alloc_failed("Number of limbs exceeds the maximum.")
		})?;

		self.limbs.try_reserve_exact(n - cap).map_err(|e| {
			log::debug!("LimbBuf: cannot grow from {} to {} limbs: {:?}", cap, n, e);
			Error::new_alloc_failed("Cannot allocate memory.")
		})?;
		self.limbs.resize(n, Limb::ZERO);

		log::trace!("LimbBuf: grown from {} to {} limbs", cap, n);
		Ok(())
	}

	/// Releases slots above `n`. Never goes below the inline size.
	pub fn shrink_to(&mut self, n: usize) {
		let n = n.max(INLINE_LIMBS);
		let cap = self.cap();
		if n >= cap {
			return;
		}
		self.limbs.truncate(n);
		self.limbs.shrink_to_fit();
		log::trace!("LimbBuf: shrunk from {} to {} limbs", cap, n);
	}
}

impl Deref for LimbBuf {
	type Target = [Limb];

	fn deref(&self) -> &Self::Target {
		&self.limbs
	}
}

impl DerefMut for LimbBuf {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.limbs
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;

	#[test]
	fn test_new() {
		let buf = LimbBuf::new();
		assert_eq!(buf.cap(), 0);
		assert_eq!(buf.is_spilled(), false);

		let buf = LimbBuf::with_capacity(INLINE_LIMBS).unwrap();
		assert_eq!(buf.cap(), INLINE_LIMBS);
		assert_eq!(buf.is_spilled(), false);
		assert!(buf.iter().all(|l| l.is_zero()));

		let buf = LimbBuf::with_capacity(10).unwrap();
		assert_eq!(buf.cap(), 10);
		assert_eq!(buf.is_spilled(), true);
	}

	#[test]
	fn test_ensure() {
		crate::init_test_logging();

		let mut buf = LimbBuf::new();
		buf.ensure(2).unwrap();
		buf[0] = Limb(5);
		buf[1] = Limb(6);

		buf.ensure(5).unwrap();
		assert_eq!(&buf[..], &[Limb(5), Limb(6), Limb::ZERO, Limb::ZERO, Limb::ZERO]);

		// never shrinks
		buf.ensure(1).unwrap();
		assert_eq!(buf.cap(), 5);
		assert_eq!(buf[1], 6);
	}

	#[test]
	fn test_ensure_too_big() {
		let mut buf = LimbBuf::with_capacity(2).unwrap();
		buf[1] = Limb(9);

		let err = buf.ensure(LimbBuf::MAX_LIMBS + 1);
		assert_eq!(err.is_err(), true);
		assert_eq!(err.err().unwrap().kind, ErrorKind::AllocationFailed);

		let err = buf.ensure(usize::MAX);
		assert_eq!(err.err().unwrap().kind, ErrorKind::AllocationFailed);

		// the buffer is untouched
		assert_eq!(&buf[..], &[Limb::ZERO, Limb(9)]);
	}

	#[test]
	fn test_shrink_to() {
		let mut buf = LimbBuf::with_capacity(20).unwrap();
		buf[2] = Limb(3);
		buf[7] = Limb(8);

		buf.shrink_to(8);
		assert_eq!(buf.cap(), 8);
		assert_eq!(buf[7], 8);

		buf.shrink_to(0);
		assert_eq!(buf.cap(), INLINE_LIMBS);
		assert_eq!(buf.is_spilled(), false);
		assert_eq!(buf[2], 3);

		// shrinking to more than the capacity is a no-op
		buf.shrink_to(100);
		assert_eq!(buf.cap(), INLINE_LIMBS);
	}
}
