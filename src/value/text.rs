use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use crate::value::{Kind, Result, Value, ValueError};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;
const NANOS_PER_MIN: u128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MIN;

/// Fraction digits beyond this are truncated; keeps `digits * unit` inside `u128`.
const MAX_FRACTION_DIGITS: usize = 18;

/// Decode a string through the destination's [`FromStr`]; the parse error text is kept verbatim.
pub fn decode_text<T>(dst: &mut T, src: &Value) -> Result<()>
where
	T: FromStr,
	T::Err: Display,
{
	let text = src.as_str().ok_or(ValueError::mismatch(Kind::String, src.kind()))?;
	*dst = text.parse::<T>().map_err(|err| ValueError::Text { message: err.to_string() })?;
	Ok(())
}

/// Implement [`Encode`](crate::value::Encode) and [`Decode`](crate::value::Decode)
/// through `Display`/`FromStr`, exchanging the type as a string.
#[macro_export]
macro_rules! impl_text {
	($($ty:ty),+ $(,)?) => {$(
		impl $crate::value::Encode for $ty {
			fn encode(&self) -> $crate::value::Value {
				$crate::value::Value::string(self.to_string())
			}
		}

		impl $crate::value::Decode for $ty {
			fn shape() -> $crate::value::Shape {
				$crate::value::Shape::String
			}

			fn decode_kind(&mut self, src: &$crate::value::Value) -> $crate::value::Result<()> {
				$crate::value::decode_text(self, src)
			}
		}
	)+};
}

crate::impl_text!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

/// Parse `[+](<digits>[.<digits>]<unit>)+` or `0`, with units `ns us µs μs ms s m h`.
pub fn parse_duration(input: &str) -> Option<Duration> {
	let text = input.strip_prefix('+').unwrap_or(input);
	if text == "0" {
		return Some(Duration::ZERO);
	}
	if text.is_empty() {
		return None;
	}

	let mut rest = text;
	let mut total: u128 = 0;
	while !rest.is_empty() {
		let number_end = rest.find(|ch: char| !(ch.is_ascii_digit() || ch == '.')).unwrap_or(rest.len());
		let (number, tail) = rest.split_at(number_end);
		let unit_end = tail.find(|ch: char| ch.is_ascii_digit() || ch == '.').unwrap_or(tail.len());
		let (unit, tail) = tail.split_at(unit_end);
		rest = tail;

		let scale = match unit {
			"ns" => 1,
			"us" | "µs" | "μs" => NANOS_PER_MICRO,
			"ms" => NANOS_PER_MILLI,
			"s" => NANOS_PER_SEC,
			"m" => NANOS_PER_MIN,
			"h" => NANOS_PER_HOUR,
			_ => return None,
		};

		let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
		if whole.is_empty() && fraction.is_empty() {
			return None;
		}
		let mut nanos = if whole.is_empty() { 0 } else { whole.parse::<u128>().ok()?.checked_mul(scale)? };
		if !fraction.is_empty() {
			if !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
				return None;
			}
			let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
			let numerator = digits.parse::<u128>().ok()?.checked_mul(scale)?;
			nanos = nanos.checked_add(numerator / 10_u128.pow(digits.len() as u32))?;
		}
		total = total.checked_add(nanos)?;
	}

	let secs = u64::try_from(total / NANOS_PER_SEC).ok()?;
	Some(Duration::new(secs, (total % NANOS_PER_SEC) as u32))
}

/// Render a duration as `1h2m3.5s`, or with a sub-second unit below one second.
pub fn format_duration(duration: Duration) -> String {
	let nanos = duration.as_nanos();
	if nanos == 0 {
		return "0s".to_owned();
	}
	if nanos < NANOS_PER_MICRO {
		return format!("{nanos}ns");
	}
	if nanos < NANOS_PER_MILLI {
		return format!("{}µs", fixed(nanos, NANOS_PER_MICRO));
	}
	if nanos < NANOS_PER_SEC {
		return format!("{}ms", fixed(nanos, NANOS_PER_MILLI));
	}

	let hours = nanos / NANOS_PER_HOUR;
	let minutes = (nanos % NANOS_PER_HOUR) / NANOS_PER_MIN;
	let seconds = nanos % NANOS_PER_MIN;

	let mut out = String::new();
	if hours > 0 {
		out.push_str(&format!("{hours}h{minutes}m"));
	} else if minutes > 0 {
		out.push_str(&format!("{minutes}m"));
	}
	out.push_str(&fixed(seconds, NANOS_PER_SEC));
	out.push('s');
	out
}

fn fixed(value: u128, scale: u128) -> String {
	let whole = value / scale;
	let fraction = value % scale;
	if fraction == 0 {
		return whole.to_string();
	}
	let width = scale.ilog10() as usize;
	let digits = format!("{fraction:0width$}");
	format!("{whole}.{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests;
