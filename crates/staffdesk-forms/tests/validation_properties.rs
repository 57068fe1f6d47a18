//! Validation Property-Based Tests
//!
//! Properties that must hold for every input to the validation engine:
//!
//! - Validating the same values twice yields the same mapping
//! - Blank input on a required field yields exactly the required error
//! - A pattern field errors with the pattern message iff the value does not match
//! - Confirmation errors appear iff the two raw values differ

use proptest::prelude::*;
use staffdesk_forms::schemas::{self, field};
use staffdesk_forms::{ErrorKind, FieldRule, FieldValues, FormSchema, validate};

// =============================================================================
// Strategy Definitions
// =============================================================================

/// Whitespace-only strings, including the empty string
fn blank_strategy() -> impl Strategy<Value = String> {
	prop::string::string_regex("[ \t\n]{0,8}").expect("Valid regex for blank input")
}

/// Arbitrary printable input for a single field
fn input_strategy() -> impl Strategy<Value = String> {
	prop::string::string_regex("[ -~]{0,24}").expect("Valid regex for field input")
}

/// A full set of employee form values with arbitrary content
fn employee_values_strategy() -> impl Strategy<Value = FieldValues> {
	prop::collection::vec(input_strategy(), 7).prop_map(|inputs| {
		[
			field::FIRST_NAME,
			field::LAST_NAME,
			field::EMAIL,
			field::DEPARTMENT,
			field::POSITION,
			field::SALARY,
			field::PHONE,
		]
		.into_iter()
		.zip(inputs)
		.map(|(name, value)| (name.to_string(), value))
		.collect()
	})
}

fn single(name: &str, value: &str) -> FieldValues {
	let mut values = FieldValues::new();
	values.insert(name.to_string(), value.to_string());
	values
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
	/// Property: validation is a pure function of its inputs
	#[test]
	fn test_validate_is_idempotent(values in employee_values_strategy()) {
		let schema = schemas::employee();

		let first = validate(&schema, &values);
		let second = validate(&schema, &values);

		prop_assert_eq!(first, second);
	}

	/// Property: blank input on a required field reports only the required message
	#[test]
	fn test_blank_required_field_reports_required(blank in blank_strategy()) {
		let schema = FormSchema::new().with_field(
			"phone",
			FieldRule::new()
				.required("Phone number is required")
				.with_min_length(10, "too short")
				.with_pattern("[0-9]{10}", "Phone number must be 10 digits")
				.expect("Valid phone pattern"),
		);

		let errors = validate(&schema, &single("phone", &blank));

		prop_assert_eq!(errors.len(), 1);
		prop_assert_eq!(errors.kind("phone"), Some(ErrorKind::Required));
		prop_assert_eq!(errors.message("phone"), Some("Phone number is required"));
	}

	/// Property: a non-blank value errors with the pattern message iff it does not match
	#[test]
	fn test_pattern_error_partition(value in "[0-9a-z]{1,14}") {
		let schema = FormSchema::new().with_field(
			"phone",
			FieldRule::new()
				.required("Phone number is required")
				.with_pattern("[0-9]{10}", "Phone number must be 10 digits")
				.expect("Valid phone pattern"),
		);
		let matches = value.len() == 10 && value.chars().all(|c| c.is_ascii_digit());

		let errors = validate(&schema, &single("phone", &value));

		if matches {
			prop_assert!(errors.is_empty());
		} else {
			prop_assert_eq!(errors.message("phone"), Some("Phone number must be 10 digits"));
		}
	}

	/// Property: confirmation errors iff the raw values differ
	#[test]
	fn test_confirmation_requires_exact_equality(
		password in "[A-Za-z0-9]{1,12}",
		confirm in "[A-Za-z0-9]{1,12}",
	) {
		let schema = FormSchema::new()
			.with_field("password", FieldRule::new().required("Password is required"))
			.with_field(
				"confirmPassword",
				FieldRule::new()
					.required("Please confirm your password")
					.must_equal("password", "Passwords must match"),
			);
		let mut values = single("password", &password);
		values.insert("confirmPassword".to_string(), confirm.clone());

		let errors = validate(&schema, &values);

		prop_assert_eq!(errors.contains("confirmPassword"), password != confirm);
	}
}
