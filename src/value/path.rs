use std::fmt;

use crate::value::{Result, ValueError};

/// One parsed operation in a field path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a named struct field or object key written as an identifier.
	Field(String),
	/// Select an array element by zero-based index.
	Index(usize),
	/// Select a map entry by arbitrary key.
	Key(String),
}

/// Parsed field path expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Parse dotted field syntax with optional `[index]` and `["key"]` selectors.
	///
	/// A selector may also open the path, e.g. `["odd key"].port`.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || ValueError::InvalidPath { path: input.to_owned() };
		if input.is_empty() {
			return Err(invalid());
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		while idx < bytes.len() {
			let start = idx;
			while idx < bytes.len() && is_ident_byte(bytes[idx]) {
				idx += 1;
			}

			if idx > start {
				steps.push(PathStep::Field(input[start..idx].to_owned()));
			} else if !(start == 0 && bytes[idx] == b'[') {
				return Err(invalid());
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				if idx < bytes.len() && bytes[idx] == b'"' {
					let k_start = idx + 1;
					let Some(len) = input[k_start..].find("\"]") else {
						return Err(invalid());
					};
					steps.push(PathStep::Key(input[k_start..k_start + len].to_owned()));
					idx = k_start + len + 2;
					continue;
				}

				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(invalid());
				}

				let number = input[n_start..idx].parse::<usize>().map_err(|_| invalid())?;
				steps.push(PathStep::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(invalid());
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(invalid());
				}
			}
		}

		Ok(Self { steps })
	}

	/// Whether the path selects the root itself.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (pos, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Field(name) | PathStep::Key(name) if is_ident(name) => {
					if pos > 0 {
						f.write_str(".")?;
					}
					f.write_str(name)?;
				}
				PathStep::Field(name) | PathStep::Key(name) => write!(f, "[\"{name}\"]")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

fn is_ident_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'_'
}

fn is_ident(name: &str) -> bool {
	!name.is_empty() && name.bytes().all(is_ident_byte)
}

#[cfg(test)]
mod tests;
