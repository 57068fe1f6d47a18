//! Employee intake
//!
//! Local only: nothing leaves the device. The handler turns the validated
//! strings into a typed record and a confirmation message.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use staffdesk_forms::schemas::field;
use staffdesk_forms::{FormSnapshot, SubmissionHandler, SubmissionResult};

pub const CONFIRMATION_TITLE: &str = "Employee Information Submitted";

/// Typed employee data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub department: String,
	pub position: String,
	pub salary: f64,
	pub phone: String,
}

/// Message shown after a successful submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeConfirmation {
	pub title: String,
	pub summary: String,
	pub record: EmployeeRecord,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeIntakeHandler;

impl EmployeeIntakeHandler {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl SubmissionHandler for EmployeeIntakeHandler {
	type Output = EmployeeConfirmation;

	async fn handle(&self, values: FormSnapshot) -> SubmissionResult<EmployeeConfirmation> {
		let salary_text = values.trimmed(field::SALARY);
		let salary = match salary_text.parse::<f64>() {
			Ok(salary) => salary,
			Err(e) => {
				tracing::warn!(error = %e, "salary did not parse after validation");
				return SubmissionResult::Failure("Salary must be a number".to_string());
			}
		};

		let record = EmployeeRecord {
			first_name: values.trimmed(field::FIRST_NAME).to_string(),
			last_name: values.trimmed(field::LAST_NAME).to_string(),
			email: values.trimmed(field::EMAIL).to_string(),
			department: values.trimmed(field::DEPARTMENT).to_string(),
			position: values.trimmed(field::POSITION).to_string(),
			salary,
			phone: values.trimmed(field::PHONE).to_string(),
		};

		let summary = format!(
			"Employee: {} {}\nEmail: {}\nDepartment: {}\nPosition: {}\nSalary: ${}",
			record.first_name,
			record.last_name,
			record.email,
			record.department,
			record.position,
			salary_text
		);

		tracing::info!(
			email = %record.email,
			department = %record.department,
			position = %record.position,
			"employee information submitted"
		);

		SubmissionResult::Success(EmployeeConfirmation {
			title: CONFIRMATION_TITLE.to_string(),
			summary,
			record,
		})
	}
}
