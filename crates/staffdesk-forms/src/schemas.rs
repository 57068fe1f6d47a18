//! Built-in schemas for the employee, sign-in and sign-up forms

use crate::rule::{FieldRule, FullPattern};
use crate::schema::FormSchema;
use regex::Regex;
use std::sync::LazyLock;

/// Field names shared by the built-in schemas and their handlers
pub mod field {
	pub const FIRST_NAME: &str = "firstName";
	pub const LAST_NAME: &str = "lastName";
	pub const FULL_NAME: &str = "fullName";
	pub const EMAIL: &str = "email";
	pub const DEPARTMENT: &str = "department";
	pub const POSITION: &str = "position";
	pub const SALARY: &str = "salary";
	pub const PHONE: &str = "phone";
	pub const PASSWORD: &str = "password";
	pub const CONFIRM_PASSWORD: &str = "confirmPassword";
}

// Local part, "@", then a domain containing at least one dot.
static EMAIL_PATTERN: LazyLock<FullPattern> = LazyLock::new(|| {
	FullPattern::new(r"[^\s@]+@[^\s@]+\.[^\s@]+").expect("EMAIL_PATTERN: invalid regex pattern")
});

static PHONE_PATTERN: LazyLock<FullPattern> = LazyLock::new(|| {
	FullPattern::new(r"[0-9]{10}").expect("PHONE_PATTERN: invalid regex pattern")
});

// One lowercase letter, one uppercase letter and one digit, anywhere.
static PASSWORD_CLASSES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
	["[a-z]", "[A-Z]", r"\d"]
		.into_iter()
		.map(|class| Regex::new(class).expect("PASSWORD_CLASSES: invalid regex pattern"))
		.collect()
});

pub const PHONE_MESSAGE: &str = "Phone number must be 10 digits";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_COMPLEXITY_MESSAGE: &str =
	"Password must contain at least one uppercase letter, one lowercase letter, and one number";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords must match";

fn email_rule(required_message: &str) -> FieldRule {
	FieldRule::new()
		.with_label("Email Address")
		.required(required_message)
		.with_full_pattern(EMAIL_PATTERN.clone(), EMAIL_MESSAGE)
}

fn phone_rule() -> FieldRule {
	FieldRule::new()
		.with_label("Phone Number")
		.required("Phone number is required")
		.with_full_pattern(PHONE_PATTERN.clone(), PHONE_MESSAGE)
}

fn password_rule() -> FieldRule {
	FieldRule::new()
		.with_label("Password")
		.required("Password is required")
		.with_min_length(6, "Password must be at least 6 characters")
}

fn name_rule(label: &str, min: usize) -> FieldRule {
	let min_message = format!("{} must be at least {} characters", label, min);
	let max_message = format!("{} must be less than 50 characters", label);
	FieldRule::new()
		.with_label(label)
		.required(format!("{} is required", label))
		.with_min_length(min, min_message)
		.with_max_length(50, max_message)
}

/// Employee intake form
///
/// # Examples
///
/// ```
/// use staffdesk_forms::schemas::{self, field};
///
/// let schema = schemas::employee();
/// assert_eq!(schema.len(), 7);
/// assert!(schema.get(field::SALARY).unwrap().number.is_some());
/// ```
pub fn employee() -> FormSchema {
	FormSchema::new()
		.with_field(field::FIRST_NAME, name_rule("First name", 2))
		.with_field(field::LAST_NAME, name_rule("Last name", 2))
		.with_field(field::EMAIL, email_rule("Email is required"))
		.with_field(
			field::DEPARTMENT,
			FieldRule::new()
				.with_label("Department")
				.required("Department is required"),
		)
		.with_field(
			field::POSITION,
			FieldRule::new()
				.with_label("Position")
				.required("Position is required"),
		)
		.with_field(
			field::SALARY,
			FieldRule::new()
				.with_label("Salary")
				.required("Salary is required")
				.numeric("Salary must be a number")
				.positive("Salary must be positive"),
		)
		.with_field(field::PHONE, phone_rule())
}

/// Sign-in form
pub fn sign_in() -> FormSchema {
	FormSchema::new()
		.with_field(field::EMAIL, email_rule("Email is required"))
		.with_field(field::PASSWORD, password_rule())
}

/// Sign-up form
pub fn sign_up() -> FormSchema {
	FormSchema::new()
		.with_field(field::FULL_NAME, name_rule("Full name", 3))
		.with_field(field::EMAIL, email_rule("Email is required"))
		.with_field(field::PHONE, phone_rule())
		.with_field(
			field::PASSWORD,
			password_rule().with_each_of(PASSWORD_CLASSES.clone(), PASSWORD_COMPLEXITY_MESSAGE),
		)
		.with_field(
			field::CONFIRM_PASSWORD,
			FieldRule::new()
				.with_label("Confirm Password")
				.required("Please confirm your password")
				.must_equal(field::PASSWORD, PASSWORD_MISMATCH_MESSAGE),
		)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ErrorKind;
	use crate::values::FieldValues;
	use rstest::rstest;

	fn valid_employee() -> FieldValues {
		[
			(field::FIRST_NAME, "Ada"),
			(field::LAST_NAME, "Lovelace"),
			(field::EMAIL, "ada@example.com"),
			(field::DEPARTMENT, "Engineering"),
			(field::POSITION, "Analyst"),
			(field::SALARY, "85000"),
			(field::PHONE, "1234567890"),
		]
		.into_iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
	}

	fn valid_sign_up() -> FieldValues {
		[
			(field::FULL_NAME, "Ada Lovelace"),
			(field::EMAIL, "ada@example.com"),
			(field::PHONE, "1234567890"),
			(field::PASSWORD, "Abc12345"),
			(field::CONFIRM_PASSWORD, "Abc12345"),
		]
		.into_iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
	}

	#[rstest]
	fn test_employee_valid_values_pass() {
		// Act
		let errors = employee().validate(&valid_employee());

		// Assert
		assert!(errors.is_empty(), "unexpected errors: {errors:?}");
	}

	#[rstest]
	#[case("12345", Some(PHONE_MESSAGE))]
	#[case("1234567890", None)]
	fn test_employee_phone(#[case] phone: &str, #[case] expected: Option<&str>) {
		// Arrange
		let mut values = valid_employee();
		values.insert(field::PHONE.to_string(), phone.to_string());

		// Act
		let errors = employee().validate(&values);

		// Assert
		assert_eq!(errors.message(field::PHONE), expected);
	}

	#[rstest]
	#[case("", "Salary is required")]
	#[case("lots", "Salary must be a number")]
	#[case("-5", "Salary must be positive")]
	fn test_employee_salary_messages(#[case] salary: &str, #[case] expected: &str) {
		// Arrange
		let mut values = valid_employee();
		values.insert(field::SALARY.to_string(), salary.to_string());

		// Act
		let errors = employee().validate(&values);

		// Assert
		assert_eq!(errors.message(field::SALARY), Some(expected));
	}

	#[rstest]
	#[case(1, Some("First name must be at least 2 characters"))]
	#[case(2, None)]
	#[case(50, None)]
	#[case(51, Some("First name must be less than 50 characters"))]
	fn test_employee_first_name_length(#[case] len: usize, #[case] expected: Option<&str>) {
		// Arrange
		let mut values = valid_employee();
		values.insert(field::FIRST_NAME.to_string(), "x".repeat(len));

		// Act
		let errors = employee().validate(&values);

		// Assert
		assert_eq!(errors.message(field::FIRST_NAME), expected);
	}

	#[rstest]
	#[case("ada@example.com", true)]
	#[case("ada.lovelace@mail.example.org", true)]
	#[case("ada@example", false)]
	#[case("ada example.com", false)]
	#[case("@example.com", false)]
	#[case("ada@@example.com", false)]
	fn test_sign_in_email_shape(#[case] email: &str, #[case] valid: bool) {
		// Arrange
		let mut values = FieldValues::new();
		values.insert(field::EMAIL.to_string(), email.to_string());
		values.insert(field::PASSWORD.to_string(), "secret1".to_string());

		// Act
		let errors = sign_in().validate(&values);

		// Assert
		assert_eq!(!errors.contains(field::EMAIL), valid);
	}

	#[rstest]
	#[case("abc12345", Some(ErrorKind::Pattern))]
	#[case("ABC12345", Some(ErrorKind::Pattern))]
	#[case("Abcdefgh", Some(ErrorKind::Pattern))]
	#[case("Abc12", Some(ErrorKind::MinLength))]
	#[case("Abc12345", None)]
	fn test_sign_up_password_complexity(#[case] password: &str, #[case] expected: Option<ErrorKind>) {
		// Arrange
		let mut values = valid_sign_up();
		values.insert(field::PASSWORD.to_string(), password.to_string());
		values.insert(field::CONFIRM_PASSWORD.to_string(), password.to_string());

		// Act
		let errors = sign_up().validate(&values);

		// Assert
		assert_eq!(errors.kind(field::PASSWORD), expected);
	}

	#[rstest]
	fn test_sign_up_complexity_message() {
		// Arrange
		let mut values = valid_sign_up();
		values.insert(field::PASSWORD.to_string(), "abc12345".to_string());

		// Act
		let errors = sign_up().validate(&values);

		// Assert
		assert_eq!(errors.message(field::PASSWORD), Some(PASSWORD_COMPLEXITY_MESSAGE));
	}

	#[rstest]
	#[case("Abc12346", Some(PASSWORD_MISMATCH_MESSAGE))]
	#[case("Abc12345", None)]
	#[case("", Some("Please confirm your password"))]
	fn test_sign_up_confirmation(#[case] confirm: &str, #[case] expected: Option<&str>) {
		// Arrange
		let mut values = valid_sign_up();
		values.insert(field::CONFIRM_PASSWORD.to_string(), confirm.to_string());

		// Act
		let errors = sign_up().validate(&values);

		// Assert
		assert_eq!(errors.message(field::CONFIRM_PASSWORD), expected);
	}
}
