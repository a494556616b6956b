use cfgval::value::{FieldPath, PathStep, Value};

/// Output truncation limits for rendered value trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single object.
	pub max_object_entries: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_object_entries: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

impl PrintOptions {
	/// Preset for quick single-screen summaries.
	pub fn compact() -> Self {
		Self {
			max_object_entries: 20,
			max_string_len: 60,
			max_array_items: 4,
			max_print_depth: 2,
		}
	}
}

/// Print one value tree to stdout.
pub fn print_value(value: &Value, indent: usize, options: PrintOptions) {
	print!("{}", render_value(value, indent, options));
}

/// Render one value tree, one scalar or bracket per line.
pub fn render_value(value: &Value, indent: usize, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, indent, 0, options);
	out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => {
			out.push_str(&format!("{pad}null\n"));
		}
		Value::Bool(v) => {
			out.push_str(&format!("{pad}{v}\n"));
		}
		Value::Number(v) => {
			out.push_str(&format!("{pad}{v}\n"));
		}
		Value::String(v) => {
			out.push_str(&format!("{pad}{:?}\n", truncate(v, options.max_string_len)));
		}
		Value::Function(function) => {
			out.push_str(&format!("{pad}<function {}>\n", function.type_name()));
		}
		Value::Capsule(capsule) => {
			out.push_str(&format!("{pad}<capsule {}>\n", capsule.type_name()));
		}
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}[... {} items]\n", items.len()));
				return;
			}
			out.push_str(&format!("{pad}[\n"));
			for item in items.iter().take(options.max_array_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				out.push_str(&format!("{pad}  ... {} more\n", items.len() - options.max_array_items));
			}
			out.push_str(&format!("{pad}]\n"));
		}
		Value::Object(map) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}{{ ... {} entries }}\n", map.len()));
				return;
			}
			out.push_str(&format!("{pad}{{\n"));
			for (key, item) in map.iter().take(options.max_object_entries) {
				out.push_str(&format!("{pad}  {} = ", render_key(key)));
				if matches!(item, Value::Object(_) | Value::Array(_)) {
					out.push('\n');
					write_value(out, item, indent + 4, depth + 1, options);
				} else {
					write_value(out, item, 0, depth + 1, options);
				}
			}
			if map.len() > options.max_object_entries {
				out.push_str(&format!("{pad}  ... {} more entries\n", map.len() - options.max_object_entries));
			}
			out.push_str(&format!("{pad}}}\n"));
		}
	}
}

fn render_key(key: &str) -> String {
	FieldPath {
		steps: vec![PathStep::Key(key.to_owned())],
	}
	.to_string()
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests {
	use cfgval::value::Value;

	use super::{PrintOptions, render_value};

	#[test]
	fn renders_nested_objects_with_keys() {
		let value = Value::object([
			("name", Value::string("api")),
			("ports", Value::array([Value::from(80), Value::from(443)])),
			("odd key", Value::Bool(true)),
		]);
		let rendered = render_value(&value, 0, PrintOptions::default());
		assert_eq!(rendered, "{\n  name = \"api\"\n  [\"odd key\"] = true\n  ports = \n    [\n      80\n      443\n    ]\n}\n");
	}

	#[test]
	fn compact_preset_truncates_long_arrays_and_deep_trees() {
		let items = Value::array((0..10).map(Value::from));
		let rendered = render_value(&items, 0, PrintOptions::compact());
		assert!(rendered.contains("... 6 more"), "{rendered}");

		let deep = Value::object([("a", Value::object([("b", Value::object([("c", Value::Null)]))]))]);
		let rendered = render_value(&deep, 0, PrintOptions::compact());
		assert!(rendered.contains("{ ... 1 entries }"), "{rendered}");
	}

	#[test]
	fn long_strings_are_cut() {
		let options = PrintOptions {
			max_string_len: 3,
			..PrintOptions::default()
		};
		assert_eq!(render_value(&Value::string("abcdef"), 2, options), "  \"abc...\"\n");
	}
}
