use std::path::Path;

use glmdoc::glm::{DecodeOptions, Model, Result};

/// Decoder flags shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct DecodeArgs {
	/// Largest array count accepted before allocating.
	#[arg(long, default_value_t = DecodeOptions::DEFAULT_MAX_ELEMENTS)]
	pub max_elements: usize,
}

impl DecodeArgs {
	pub(crate) fn options(self) -> DecodeOptions {
		DecodeOptions {
			max_elements: self.max_elements,
		}
	}

	pub(crate) fn open(self, path: &Path) -> Result<Model> {
		Model::open_with_options(path, &self.options())
	}
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) {
	match serde_json::to_string_pretty(value) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json: {err}"),
	}
}

/// Hierarchy name for a surface position, `-` when absent.
pub(crate) fn surface_name(model: &Model, index: usize) -> &str {
	model.hierarchy().get(index).map_or("-", |entry| entry.name.as_str())
}

/// Render a float triple compactly.
pub(crate) fn vec_label(values: &[f32]) -> String {
	let parts: Vec<String> = values.iter().map(|value| format!("{value}")).collect();
	format!("({})", parts.join(", "))
}

#[cfg(test)]
mod tests {
	use super::vec_label;

	#[test]
	fn vec_label_joins_components() {
		assert_eq!(vec_label(&[1.0, -2.5, 0.0]), "(1, -2.5, 0)");
		assert_eq!(vec_label(&[]), "()");
	}
}
