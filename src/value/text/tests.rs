mod duration {
	use std::time::Duration;

	use crate::value::{format_duration, parse_duration};

	#[test]
	fn accepts_compound_and_fractional_units() {
		assert_eq!(parse_duration("0"), Some(Duration::ZERO));
		assert_eq!(parse_duration("300ms"), Some(Duration::from_millis(300)));
		assert_eq!(parse_duration("1.5s"), Some(Duration::from_millis(1500)));
		assert_eq!(parse_duration("+1m30s"), Some(Duration::from_secs(90)));
		assert_eq!(parse_duration("2h45m"), Some(Duration::from_secs(2 * 3600 + 45 * 60)));
		assert_eq!(parse_duration(".5h"), Some(Duration::from_secs(1800)));
		assert_eq!(parse_duration("10us"), Some(Duration::from_micros(10)));
		assert_eq!(parse_duration("10µs"), Some(Duration::from_micros(10)));
		assert_eq!(parse_duration("7ns"), Some(Duration::from_nanos(7)));
	}

	#[test]
	fn rejects_negative_unitless_and_unknown() {
		for input in ["", "-1s", "1", "1d", "s", ".s", "1.2.3s", "+", "5 s"] {
			assert_eq!(parse_duration(input), None, "accepted {input:?}");
		}
	}

	#[test]
	fn formats_canonically() {
		assert_eq!(format_duration(Duration::ZERO), "0s");
		assert_eq!(format_duration(Duration::from_nanos(42)), "42ns");
		assert_eq!(format_duration(Duration::from_micros(1500)), "1.5ms");
		assert_eq!(format_duration(Duration::from_micros(250)), "250µs");
		assert_eq!(format_duration(Duration::from_millis(300)), "300ms");
		assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
		assert_eq!(format_duration(Duration::from_secs(90)), "1m30s");
		assert_eq!(format_duration(Duration::from_secs(3600)), "1h0m0s");
	}

	#[test]
	fn formatted_text_parses_back() {
		for duration in [Duration::from_nanos(1), Duration::from_micros(999), Duration::from_millis(1250), Duration::from_secs(3725)] {
			let text = format_duration(duration);
			assert_eq!(parse_duration(&text), Some(duration), "{text}");
		}
	}
}

mod bridge {
	use std::net::{IpAddr, Ipv4Addr, SocketAddr};

	use crate::value::{Value, ValueError, decode_new, encode};

	#[test]
	fn ip_addresses_exchange_as_strings() {
		let ip: IpAddr = decode_new(&Value::string("10.0.0.1")).expect("ip decodes");
		assert_eq!(ip, IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)));
		assert_eq!(encode(&ip), Value::string("10.0.0.1"));

		let socket: SocketAddr = decode_new(&Value::string("[::1]:8080")).expect("socket decodes");
		assert_eq!(socket.port(), 8080);
	}

	#[test]
	fn parser_message_is_kept_verbatim() {
		let err = decode_new::<Ipv4Addr>(&Value::string("300.1.1.1")).expect_err("bad address");
		assert!(matches!(err, ValueError::Text { .. }));
		assert_eq!(err.to_string(), "invalid IPv4 address syntax");
	}

	#[test]
	fn non_string_sources_mismatch() {
		let err = decode_new::<IpAddr>(&Value::Bool(true)).expect_err("bool is not text");
		assert_eq!(err.to_string(), "expected string, got bool");
	}
}
