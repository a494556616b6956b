mod parse {
	use crate::value::Number;

	#[test]
	fn integers_parse_before_floats() {
		let number = Number::parse("15").expect("integer parses");
		assert!(!number.is_float());
		assert_eq!(number.as_i64(), Some(15));

		let big = Number::parse("18446744073709551615").expect("u64 max parses");
		assert_eq!(big.as_u64(), Some(u64::MAX));
		assert_eq!(big.as_i64(), None);

		let float = Number::parse("1.5").expect("float parses");
		assert!(float.is_float());
		assert!(!float.is_integral());
	}

	#[test]
	fn nan_and_garbage_are_rejected() {
		assert!(Number::parse("NaN").is_none());
		assert!(Number::parse("fifteen").is_none());
		assert!(Number::parse("").is_none());
		assert!(Number::from_f64(f64::NAN).is_none());
	}
}

mod conversion {
	use crate::value::{Number, ValueError};

	#[test]
	fn exact_floats_convert_to_integers() {
		let number = Number::from_f64(15.0).expect("finite float");
		assert_eq!(number.to_int::<u8>(), Some(15));
		assert_eq!(number.to_int::<i64>(), Some(15));
	}

	#[test]
	fn fractional_and_out_of_range_values_fail() {
		let half = Number::from_f64(0.5).expect("finite float");
		assert_eq!(half.to_int::<i32>(), None);
		assert!(matches!(half.range_error("i32"), ValueError::NotIntegral { .. }));

		let wide = Number::from(300_i64);
		assert_eq!(wide.to_int::<u8>(), None);
		assert_eq!(wide.range_error("u8").to_string(), "300 overflows u8");

		let negative = Number::from(-1_i32);
		assert_eq!(negative.to_int::<u64>(), None);

		let huge = Number::from_f64(1e300).expect("finite float");
		assert_eq!(huge.to_int::<i64>(), None);
		assert_eq!(huge.to_f32(), None);
	}

	#[test]
	fn display_is_canonical_decimal() {
		assert_eq!(Number::from(15_u8).to_string(), "15");
		assert_eq!(Number::from_f64(15.0).expect("finite").to_string(), "15");
		assert_eq!(Number::from_f64(2.25).expect("finite").to_string(), "2.25");
		assert_eq!(Number::from(u64::MAX).to_string(), "18446744073709551615");
	}

	#[test]
	fn equality_is_numeric_across_representations() {
		assert_eq!(Number::from(15_u64), Number::from(15_i8));
		assert_eq!(Number::from_f64(15.0).expect("finite"), Number::from(15_i32));
		assert_ne!(Number::from_f64(15.5).expect("finite"), Number::from(15_i32));
	}
}
