use std::io::{self, Read, Seek, SeekFrom};

use crate::glm::{DecodeOptions, GlmError, Result};

/// Width of every fixed string field in the format.
pub const NAME_LEN: usize = 64;

/// Most elements reserved up front for any array read from the stream.
/// Larger arrays grow as their elements are actually read.
pub const PREALLOC_LIMIT: usize = 4096;

/// Empty vector sized for `count` elements, capped at [`PREALLOC_LIMIT`].
pub fn bounded_vec<T>(count: usize) -> Vec<T> {
	Vec::with_capacity(count.min(PREALLOC_LIMIT))
}

/// Seekable little-endian reader over a `.glm` byte stream.
///
/// Every failure is reported as [`GlmError::Io`] tagged with the step last
/// announced through [`GlmReader::step`].
pub struct GlmReader<R> {
	inner: R,
	step: &'static str,
	max_elements: usize,
}

impl<R: Read + Seek> GlmReader<R> {
	/// Wrap a stream using the default element limit.
	pub fn new(inner: R) -> Self {
		Self::with_options(inner, &DecodeOptions::default())
	}

	/// Wrap a stream using limits from `options`.
	pub fn with_options(inner: R, options: &DecodeOptions) -> Self {
		Self {
			inner,
			step: "reading stream",
			max_elements: options.max_elements,
		}
	}

	/// Name the decode step that subsequent reads belong to.
	pub fn step(&mut self, step: &'static str) -> &mut Self {
		self.step = step;
		self
	}

	/// Return current absolute stream offset.
	pub fn tell(&mut self) -> Result<u64> {
		self.inner.stream_position().map_err(GlmError::io(self.step))
	}

	/// Seek to an absolute offset.
	pub fn seek_to(&mut self, offset: i64) -> Result<u64> {
		let Ok(target) = u64::try_from(offset) else {
			return Err(GlmError::Io {
				context: self.step,
				source: io::Error::new(io::ErrorKind::InvalidInput, format!("seek to negative offset {offset}")),
			});
		};
		self.inner.seek(SeekFrom::Start(target)).map_err(GlmError::io(self.step))
	}

	/// Seek to `base + relative`, the addressing used by every nested block.
	pub fn seek_relative_to(&mut self, base: u64, relative: i32) -> Result<u64> {
		self.seek_to(base as i64 + i64::from(relative))
	}

	/// Read exactly `N` bytes.
	pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
		let mut buf = [0_u8; N];
		self.inner.read_exact(&mut buf).map_err(GlmError::io(self.step))?;
		Ok(buf)
	}

	/// Read a four-byte identifier.
	pub fn read_ident(&mut self) -> Result<[u8; 4]> {
		self.read_bytes::<4>()
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_bytes()?))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_bytes()?))
	}

	/// Read a little-endian `f32`.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.read_bytes()?))
	}

	/// Read three consecutive `f32` values.
	pub fn read_vec3(&mut self) -> Result<[f32; 3]> {
		Ok([self.read_f32_le()?, self.read_f32_le()?, self.read_f32_le()?])
	}

	/// Read a fixed 64-byte name field.
	pub fn read_name(&mut self) -> Result<String> {
		let raw = self.read_bytes::<NAME_LEN>()?;
		Ok(fixed_name(&raw))
	}

	/// Read a signed count field and validate it.
	pub fn read_count(&mut self, kind: &'static str) -> Result<usize> {
		let count = self.read_i32_le()?;
		self.check_count(kind, count)
	}

	/// Validate a signed count read earlier.
	pub fn check_count(&self, kind: &'static str, count: i32) -> Result<usize> {
		let Ok(count) = usize::try_from(count) else {
			return Err(GlmError::NegativeCount { kind, count });
		};
		if count > self.max_elements {
			return Err(GlmError::CountTooLarge {
				kind,
				count,
				max: self.max_elements,
			});
		}
		Ok(count)
	}

	/// Read `count` little-endian `i32` values.
	pub fn read_i32_array(&mut self, count: usize) -> Result<Vec<i32>> {
		let mut out = bounded_vec(count);
		for _ in 0..count {
			out.push(self.read_i32_le()?);
		}
		Ok(out)
	}

	/// Unwrap the underlying stream.
	pub fn into_inner(self) -> R {
		self.inner
	}
}

/// Decode a fixed-width name: bytes up to the first NUL, or all of them.
pub fn fixed_name(raw: &[u8]) -> String {
	let end = raw.iter().position(|byte| *byte == 0).unwrap_or(raw.len());
	String::from_utf8_lossy(&raw[..end]).into_owned()
}

#[cfg(test)]
mod tests;
