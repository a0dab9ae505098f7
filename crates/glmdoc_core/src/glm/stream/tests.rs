use std::io::Cursor;

use crate::glm::{DecodeOptions, ErrorKind, GlmError, GlmReader, PREALLOC_LIMIT, bounded_vec, fixed_name};

#[test]
fn reads_little_endian_scalars() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&(-7_i32).to_le_bytes());
	bytes.extend_from_slice(&0xDEAD_BEEF_u32.to_le_bytes());
	bytes.extend_from_slice(&1.5_f32.to_le_bytes());

	let mut reader = GlmReader::new(Cursor::new(bytes));
	assert_eq!(reader.read_i32_le().expect("i32"), -7);
	assert_eq!(reader.read_u32_le().expect("u32"), 0xDEAD_BEEF);
	assert_eq!(reader.read_f32_le().expect("f32"), 1.5);
	assert_eq!(reader.tell().expect("tell"), 12);
}

#[test]
fn short_read_reports_step_context() {
	let mut reader = GlmReader::new(Cursor::new(vec![1_u8, 2]));
	reader.step("reading header");
	let err = reader.read_i32_le().expect_err("two bytes cannot hold an i32");
	assert_eq!(err.kind(), ErrorKind::Io);
	assert!(err.to_string().starts_with("reading header: "), "got {err}");
}

#[test]
fn negative_seek_is_io_error() {
	let mut reader = GlmReader::new(Cursor::new(vec![0_u8; 8]));
	let err = reader.seek_relative_to(4, -8).expect_err("negative target");
	assert!(matches!(err, GlmError::Io { source, .. } if source.kind() == std::io::ErrorKind::InvalidInput));
}

#[test]
fn relative_seek_lands_on_base_plus_offset() {
	let mut reader = GlmReader::new(Cursor::new(vec![0_u8; 32]));
	assert_eq!(reader.seek_relative_to(10, 6).expect("seek"), 16);
	assert_eq!(reader.tell().expect("tell"), 16);
}

#[test]
fn count_validation_rejects_negative_and_oversized() {
	let options = DecodeOptions { max_elements: 4 };
	let reader = GlmReader::with_options(Cursor::new(Vec::new()), &options);

	assert_eq!(reader.check_count("vertex", 4).expect("at limit"), 4);
	assert!(matches!(
		reader.check_count("vertex", -1),
		Err(GlmError::NegativeCount { kind: "vertex", count: -1 })
	));
	assert!(matches!(
		reader.check_count("triangle", 5),
		Err(GlmError::CountTooLarge { kind: "triangle", count: 5, max: 4 })
	));
}

#[test]
fn fixed_name_truncates_at_first_nul() {
	let mut raw = [0_u8; 64];
	raw[..5].copy_from_slice(b"torso");
	raw[6] = b'x';
	assert_eq!(fixed_name(&raw), "torso");
}

#[test]
fn fixed_name_without_nul_keeps_full_width() {
	let raw = [b'a'; 64];
	assert_eq!(fixed_name(&raw).len(), 64);
}

#[test]
fn preallocation_is_capped() {
	let huge: Vec<[u8; 40]> = bounded_vec((1 << 24) - 1);
	assert!(huge.capacity() >= PREALLOC_LIMIT);
	assert!(huge.capacity() < 1 << 24);
	let small: Vec<i32> = bounded_vec(3);
	assert!(small.capacity() >= 3);
}

#[test]
fn huge_array_count_fails_on_read_not_on_reserve() {
	let mut bytes = Vec::new();
	bytes.extend_from_slice(&5_i32.to_le_bytes());
	let mut reader = GlmReader::new(Cursor::new(bytes));
	reader.step("reading bone references");
	let err = reader.read_i32_array((1 << 24) - 1).expect_err("only one value stored");
	assert_eq!(err.kind(), ErrorKind::Io);
	assert!(err.to_string().starts_with("reading bone references: "), "got {err}");
}

#[test]
fn into_inner_keeps_stream_position() {
	let mut reader = GlmReader::new(Cursor::new(vec![0_u8; 16]));
	reader.seek_to(4).expect("seek");
	reader.read_u32_le().expect("u32");
	let cursor = reader.into_inner();
	assert_eq!(cursor.position(), 8);
	assert_eq!(cursor.into_inner().len(), 16);
}
