use crate::error::{Error, assert};
use crate::limb::Limb;
use crate::width::FixedWidth;

/// Number of limbs needed to store `bits` bits.
#[inline]
pub const fn limbs_for_bits(bits: usize) -> usize {
	bits.div_ceil(Limb::BITS)
}

/// Returns the length of `a[..n]` without the high zero limbs.
#[inline]
pub fn trim(a: &[Limb], mut n: usize) -> usize {
	debug_assert!(n <= a.len());
	while n > 0 && a[n - 1].is_zero() {
		n -= 1;
	}
	n
}

/// Returns the number of bits needed to store the number.
/// High zero limbs are ignored.
pub fn bit_width(a: &[Limb]) -> usize {
	let n = trim(a, a.len());
	if n == 0 {
		0 //
	} else {
		(n - 1) * Limb::BITS + a[n - 1].bit_width()
	}
}

/// Splits `v` into limbs, least significant first.
///
/// Writes exactly `limbs_for_bits(T::BITS)` limbs and returns how many of them are in use
/// after trimming the high zeros. `r.len` must be at least `limbs_for_bits(T::BITS)`.
#[inline]
#[must_use]
pub fn write_unsigned<T: FixedWidth>(r: &mut [Limb], v: T) -> Result<usize, Error> {
	let n = limbs_for_bits(T::BITS);
	assert(r.len() >= n, || Error::new_buffer_too_small("ll::write_unsigned()"))?;

	let mut v = v;
	for (i, limb) in r[..n].iter_mut().enumerate() {
		*limb = v.low_limb();
		// With n > 1 we know T::BITS > Limb::BITS, so the shift is in range.
		if i + 1 < n {
			v = v >> Limb::BITS;
		}
	}

	Ok(trim(r, n))
}

/// Reads the low `T::BITS` bits of the number in `a`.
pub fn read_unsigned<T: FixedWidth>(a: &[Limb]) -> T {
	let n = a.len().min(limbs_for_bits(T::BITS));
	let mut val = T::zero();
	for limb in a[..n].iter().rev() {
		if T::BITS > Limb::BITS {
			val = val << Limb::BITS;
		}
		val = val | T::from_limb(*limb);
	}
	val
}
