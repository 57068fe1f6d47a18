//! Declarative per-field rules
//!
//! A [`FieldRule`] is plain data: the checks it carries are always evaluated
//! in the same order (required, min length, max length, patterns, number,
//! cross-field equality) no matter in which order the builder methods were
//! called. The first failing check produces the field's only error.

use crate::error::{ErrorKind, FieldError, FormsResult};
use crate::values::FieldValues;
use regex::Regex;

/// A regular expression that must match the whole value.
///
/// The source is wrapped as `^(?:...)$` on construction, so `"[0-9]{10}"`
/// rejects `"12345678901"` instead of finding a ten digit run inside it.
///
/// # Examples
///
/// ```
/// use staffdesk_forms::FullPattern;
///
/// let phone = FullPattern::new("[0-9]{10}").unwrap();
/// assert!(phone.is_full_match("1234567890"));
/// assert!(!phone.is_full_match("12345678901"));
/// assert!(!phone.is_full_match("x1234567890"));
/// ```
#[derive(Debug, Clone)]
pub struct FullPattern {
	regex: Regex,
	source: String,
}

impl FullPattern {
	pub fn new(pattern: &str) -> FormsResult<Self> {
		let regex = Regex::new(&format!("^(?:{})$", pattern))?;
		Ok(Self {
			regex,
			source: pattern.to_string(),
		})
	}

	pub fn is_full_match(&self, value: &str) -> bool {
		self.regex.is_match(value)
	}

	/// The pattern as written, without the added anchors
	pub fn as_str(&self) -> &str {
		&self.source
	}
}

/// A pattern check applied to the trimmed value
#[derive(Debug, Clone)]
pub enum PatternCheck {
	/// The whole value must match
	FullMatch { pattern: FullPattern, message: String },
	/// Every listed expression must be found somewhere in the value
	ContainsEach { patterns: Vec<Regex>, message: String },
}

impl PatternCheck {
	fn passes(&self, value: &str) -> bool {
		match self {
			PatternCheck::FullMatch { pattern, .. } => pattern.is_full_match(value),
			PatternCheck::ContainsEach { patterns, .. } => {
				patterns.iter().all(|p| p.is_match(value))
			}
		}
	}

	fn message(&self) -> &str {
		match self {
			PatternCheck::FullMatch { message, .. } | PatternCheck::ContainsEach { message, .. } => {
				message
			}
		}
	}
}

/// An inclusive length limit, counted in characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthBound {
	pub limit: usize,
	pub message: String,
}

/// Numeric parsing of a string-typed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberCheck {
	pub type_message: String,
	pub positive_message: Option<String>,
}

/// Equality with another field of the same form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
	pub other: String,
	pub message: String,
}

const DEFAULT_NUMBER_MESSAGE: &str = "Enter a number";

/// Rule set for a single form field
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
	pub label: Option<String>,
	pub required: Option<String>,
	pub min_length: Option<LengthBound>,
	pub max_length: Option<LengthBound>,
	pub patterns: Vec<PatternCheck>,
	pub number: Option<NumberCheck>,
	pub equals: Option<FieldMatch>,
}

impl FieldRule {
	/// Create a rule with no checks; every value passes
	///
	/// # Examples
	///
	/// ```
	/// use staffdesk_forms::FieldRule;
	///
	/// let rule = FieldRule::new();
	/// assert!(!rule.is_required());
	/// assert!(rule.patterns.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Require a non-blank value
	///
	/// # Examples
	///
	/// ```
	/// use staffdesk_forms::FieldRule;
	///
	/// let rule = FieldRule::new().required("Email is required");
	/// assert!(rule.is_required());
	/// assert_eq!(rule.required.as_deref(), Some("Email is required"));
	/// ```
	pub fn required(mut self, message: impl Into<String>) -> Self {
		self.required = Some(message.into());
		self
	}

	/// Set the minimum trimmed length
	///
	/// # Examples
	///
	/// ```
	/// use staffdesk_forms::FieldRule;
	///
	/// let rule = FieldRule::new().with_min_length(2, "Too short");
	/// assert_eq!(rule.min_length.map(|b| b.limit), Some(2));
	/// ```
	pub fn with_min_length(mut self, limit: usize, message: impl Into<String>) -> Self {
		self.min_length = Some(LengthBound {
			limit,
			message: message.into(),
		});
		self
	}

	/// Set the maximum trimmed length
	pub fn with_max_length(mut self, limit: usize, message: impl Into<String>) -> Self {
		self.max_length = Some(LengthBound {
			limit,
			message: message.into(),
		});
		self
	}

	/// Add a full-match pattern compiled from `pattern`
	///
	/// # Examples
	///
	/// ```
	/// use staffdesk_forms::FieldRule;
	///
	/// let rule = FieldRule::new()
	///     .with_pattern("[0-9]{10}", "Phone number must be 10 digits")
	///     .unwrap();
	/// assert_eq!(rule.patterns.len(), 1);
	///
	/// assert!(FieldRule::new().with_pattern("(", "broken").is_err());
	/// ```
	pub fn with_pattern(self, pattern: &str, message: impl Into<String>) -> FormsResult<Self> {
		Ok(self.with_full_pattern(FullPattern::new(pattern)?, message))
	}

	/// Add an already compiled full-match pattern
	pub fn with_full_pattern(mut self, pattern: FullPattern, message: impl Into<String>) -> Self {
		self.patterns.push(PatternCheck::FullMatch {
			pattern,
			message: message.into(),
		});
		self
	}

	/// Require every expression in `patterns` to occur in the value
	///
	/// # Examples
	///
	/// ```
	/// use regex::Regex;
	/// use staffdesk_forms::FieldRule;
	///
	/// let rule = FieldRule::new().with_each_of(
	///     vec![Regex::new("[a-z]").unwrap(), Regex::new("[0-9]").unwrap()],
	///     "Needs a letter and a digit",
	/// );
	/// assert_eq!(rule.patterns.len(), 1);
	/// ```
	pub fn with_each_of(mut self, patterns: Vec<Regex>, message: impl Into<String>) -> Self {
		self.patterns.push(PatternCheck::ContainsEach {
			patterns,
			message: message.into(),
		});
		self
	}

	/// Require the value to parse as a finite number
	pub fn numeric(mut self, message: impl Into<String>) -> Self {
		let positive_message = self.number.take().and_then(|n| n.positive_message);
		self.number = Some(NumberCheck {
			type_message: message.into(),
			positive_message,
		});
		self
	}

	/// Require the parsed number to be greater than zero.
	///
	/// Implies [`FieldRule::numeric`] with a default message when it was not
	/// configured.
	///
	/// # Examples
	///
	/// ```
	/// use staffdesk_forms::FieldRule;
	///
	/// let rule = FieldRule::new()
	///     .positive("Salary must be positive")
	///     .numeric("Salary must be a number");
	/// let number = rule.number.unwrap();
	/// assert_eq!(number.type_message, "Salary must be a number");
	/// assert_eq!(number.positive_message.as_deref(), Some("Salary must be positive"));
	/// ```
	pub fn positive(mut self, message: impl Into<String>) -> Self {
		let type_message = self
			.number
			.take()
			.map(|n| n.type_message)
			.unwrap_or_else(|| DEFAULT_NUMBER_MESSAGE.to_string());
		self.number = Some(NumberCheck {
			type_message,
			positive_message: Some(message.into()),
		});
		self
	}

	/// Require the value to equal the value of the field named `other`
	pub fn must_equal(mut self, other: impl Into<String>, message: impl Into<String>) -> Self {
		self.equals = Some(FieldMatch {
			other: other.into(),
			message: message.into(),
		});
		self
	}

	pub fn is_required(&self) -> bool {
		self.required.is_some()
	}

	/// Evaluate the rule against `value`, returning the first failure.
	///
	/// `values` supplies the other fields of the form for the cross-field
	/// check; a missing reference counts as empty.
	///
	/// A blank value (empty after trimming) fails only the required check.
	/// On a field that is not required, a blank value passes every other
	/// check, so an optional field may be left empty.
	pub fn check(&self, value: &str, values: &FieldValues) -> Option<FieldError> {
		let trimmed = value.trim();

		if trimmed.is_empty() {
			return self
				.required
				.as_ref()
				.map(|message| FieldError::new(ErrorKind::Required, message.clone()));
		}

		let char_count = trimmed.chars().count();
		if let Some(bound) = &self.min_length
			&& char_count < bound.limit
		{
			return Some(FieldError::new(ErrorKind::MinLength, bound.message.clone()));
		}
		if let Some(bound) = &self.max_length
			&& char_count > bound.limit
		{
			return Some(FieldError::new(ErrorKind::MaxLength, bound.message.clone()));
		}

		if let Some(failed) = self.patterns.iter().find(|p| !p.passes(trimmed)) {
			return Some(FieldError::new(ErrorKind::Pattern, failed.message()));
		}

		if let Some(number) = &self.number {
			match trimmed.parse::<f64>() {
				Ok(n) if n.is_finite() => {
					if let Some(message) = &number.positive_message
						&& n <= 0.0
					{
						return Some(FieldError::new(ErrorKind::NotPositive, message.clone()));
					}
				}
				_ => {
					return Some(FieldError::new(
						ErrorKind::NotANumber,
						number.type_message.clone(),
					));
				}
			}
		}

		if let Some(matching) = &self.equals {
			let reference = values.get(&matching.other).map(String::as_str).unwrap_or("");
			if !reference.trim().is_empty() && value != reference {
				return Some(FieldError::new(ErrorKind::Mismatch, matching.message.clone()));
			}
		}

		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn no_values() -> FieldValues {
		FieldValues::new()
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("\t\n")]
	fn test_required_rejects_blank(#[case] input: &str) {
		// Arrange
		let rule = FieldRule::new()
			.required("Required")
			.with_min_length(3, "Too short");

		// Act
		let error = rule.check(input, &no_values());

		// Assert
		assert_eq!(error, Some(FieldError::new(ErrorKind::Required, "Required")));
	}

	#[rstest]
	fn test_optional_blank_skips_remaining_checks() {
		// Arrange
		let rule = FieldRule::new()
			.with_min_length(3, "Too short")
			.numeric("Not a number");

		// Act & Assert
		assert_eq!(rule.check("", &no_values()), None);
		assert_eq!(rule.check("  ", &no_values()), None);
	}

	#[rstest]
	#[case("ab", Some(ErrorKind::MinLength))]
	#[case("abc", None)]
	#[case("abcde", None)]
	#[case("abcdef", Some(ErrorKind::MaxLength))]
	#[case("  ab  ", Some(ErrorKind::MinLength))]
	#[case("  abcde  ", None)]
	fn test_length_bounds_are_inclusive_on_trimmed_value(
		#[case] input: &str,
		#[case] expected: Option<ErrorKind>,
	) {
		// Arrange
		let rule = FieldRule::new()
			.with_min_length(3, "min")
			.with_max_length(5, "max");

		// Act
		let error = rule.check(input, &no_values());

		// Assert
		assert_eq!(error.map(|e| e.kind), expected);
	}

	#[rstest]
	fn test_length_counts_characters_not_bytes() {
		// Arrange
		let rule = FieldRule::new().with_max_length(3, "max");

		// Act & Assert
		assert_eq!(rule.check("äöü", &no_values()), None);
		assert!(rule.check("äöüß", &no_values()).is_some());
	}

	#[rstest]
	fn test_min_length_reported_before_pattern() {
		// Arrange
		let rule = FieldRule::new()
			.with_pattern("[A-Z]+", "upper only")
			.unwrap()
			.with_min_length(4, "min");

		// Act
		let error = rule.check("ab", &no_values()).unwrap();

		// Assert
		assert_eq!(error.kind, ErrorKind::MinLength);
	}

	#[rstest]
	#[case("1234567890", None)]
	#[case(" 1234567890 ", None)]
	#[case("12345", Some(ErrorKind::Pattern))]
	#[case("12345678901", Some(ErrorKind::Pattern))]
	#[case("123456789a", Some(ErrorKind::Pattern))]
	fn test_full_match_pattern(#[case] input: &str, #[case] expected: Option<ErrorKind>) {
		// Arrange
		let rule = FieldRule::new()
			.with_pattern("[0-9]{10}", "Phone number must be 10 digits")
			.unwrap();

		// Act
		let error = rule.check(input, &no_values());

		// Assert
		assert_eq!(error.map(|e| e.kind), expected);
	}

	#[rstest]
	fn test_contains_each_requires_every_class() {
		// Arrange
		let rule = FieldRule::new().with_each_of(
			vec![
				Regex::new("[a-z]").unwrap(),
				Regex::new("[A-Z]").unwrap(),
				Regex::new("[0-9]").unwrap(),
			],
			"complexity",
		);

		// Act & Assert
		assert_eq!(rule.check("Abc12345", &no_values()), None);
		assert_eq!(
			rule.check("abc12345", &no_values()).map(|e| e.kind),
			Some(ErrorKind::Pattern)
		);
		assert_eq!(
			rule.check("ABCdefgh", &no_values()).map(|e| e.kind),
			Some(ErrorKind::Pattern)
		);
	}

	#[rstest]
	#[case("5000", None)]
	#[case("0.5", None)]
	#[case(" 42 ", None)]
	#[case("abc", Some(ErrorKind::NotANumber))]
	#[case("12abc", Some(ErrorKind::NotANumber))]
	#[case("inf", Some(ErrorKind::NotANumber))]
	#[case("NaN", Some(ErrorKind::NotANumber))]
	#[case("0", Some(ErrorKind::NotPositive))]
	#[case("-10", Some(ErrorKind::NotPositive))]
	fn test_positive_number(#[case] input: &str, #[case] expected: Option<ErrorKind>) {
		// Arrange
		let rule = FieldRule::new()
			.required("Salary is required")
			.numeric("Salary must be a number")
			.positive("Salary must be positive");

		// Act
		let error = rule.check(input, &no_values());

		// Assert
		assert_eq!(error.map(|e| e.kind), expected);
	}

	#[rstest]
	fn test_must_equal_is_exact() {
		// Arrange
		let rule = FieldRule::new().must_equal("password", "Passwords must match");
		let mut values = FieldValues::new();
		values.insert("password".to_string(), "Abc12345".to_string());

		// Act & Assert
		assert_eq!(rule.check("Abc12345", &values), None);
		assert_eq!(
			rule.check("abc12345", &values).map(|e| e.kind),
			Some(ErrorKind::Mismatch)
		);
		assert_eq!(
			rule.check("Abc12345 ", &values).map(|e| e.kind),
			Some(ErrorKind::Mismatch)
		);
	}

	#[rstest]
	fn test_must_equal_skipped_while_reference_is_empty() {
		// Arrange
		let rule = FieldRule::new().must_equal("password", "Passwords must match");
		let mut values = FieldValues::new();
		values.insert("password".to_string(), "  ".to_string());

		// Act & Assert
		assert_eq!(rule.check("anything", &values), None);
		assert_eq!(rule.check("anything", &no_values()), None);
	}

	#[rstest]
	fn test_invalid_pattern_is_reported() {
		// Act
		let result = FieldRule::new().with_pattern("[unclosed", "never");

		// Assert
		assert!(matches!(result, Err(crate::FormsError::Pattern(_))));
	}
}
