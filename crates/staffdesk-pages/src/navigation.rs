//! Screen navigation
//!
//! Screens never manipulate history themselves; they ask a [`Navigator`] to
//! push or replace. [`StackNavigator`] keeps the history in memory.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The app's screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenId {
	Home,
	EmployeeForm,
	SignIn,
	SignUp,
	Dashboard,
}

impl ScreenId {
	pub fn path(self) -> &'static str {
		match self {
			ScreenId::Home => "/",
			ScreenId::EmployeeForm => "/employee-form",
			ScreenId::SignIn => "/sign-in",
			ScreenId::SignUp => "/sign-up",
			ScreenId::Dashboard => "/dashboard",
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			ScreenId::Home => "Home",
			ScreenId::EmployeeForm => "Employee Form",
			ScreenId::SignIn => "Sign In",
			ScreenId::SignUp => "Sign Up",
			ScreenId::Dashboard => "Dashboard",
		}
	}
}

impl fmt::Display for ScreenId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.path())
	}
}

/// Error type for navigation operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
	/// `back` was called with only the root screen in history.
	#[error("Cannot go back from root screen {0}")]
	AtRoot(ScreenId),
	/// The platform refused the transition.
	#[error("Navigation failed: {0}")]
	Failed(String),
}

/// Screen history operations
pub trait Navigator: Send + Sync {
	/// Push `screen` on top of the history.
	fn go_to(&self, screen: ScreenId) -> Result<(), NavigationError>;

	/// Replace the current screen; the replaced one is no longer reachable with `back`.
	fn replace_with(&self, screen: ScreenId) -> Result<(), NavigationError>;

	/// Pop the current screen and return the one now shown.
	fn back(&self) -> Result<ScreenId, NavigationError>;

	fn current(&self) -> ScreenId;
}

/// In-memory history stack
///
/// # Examples
///
/// ```
/// use staffdesk_pages::{Navigator, ScreenId, StackNavigator};
///
/// let nav = StackNavigator::new();
/// nav.go_to(ScreenId::SignUp).unwrap();
/// nav.replace_with(ScreenId::Dashboard).unwrap();
///
/// assert_eq!(nav.current(), ScreenId::Dashboard);
/// assert_eq!(nav.back().unwrap(), ScreenId::Home);
/// assert!(nav.back().is_err());
/// ```
#[derive(Debug)]
pub struct StackNavigator {
	stack: Mutex<Vec<ScreenId>>,
}

impl StackNavigator {
	/// History starting at [`ScreenId::Home`]
	pub fn new() -> Self {
		Self::with_root(ScreenId::Home)
	}

	pub fn with_root(root: ScreenId) -> Self {
		Self {
			stack: Mutex::new(vec![root]),
		}
	}

	/// History from root to current
	pub fn history(&self) -> Vec<ScreenId> {
		self.stack.lock().clone()
	}

	pub fn depth(&self) -> usize {
		self.stack.lock().len()
	}
}

impl Default for StackNavigator {
	fn default() -> Self {
		Self::new()
	}
}

impl Navigator for StackNavigator {
	fn go_to(&self, screen: ScreenId) -> Result<(), NavigationError> {
		self.stack.lock().push(screen);
		tracing::debug!(screen = %screen, "navigated");
		Ok(())
	}

	fn replace_with(&self, screen: ScreenId) -> Result<(), NavigationError> {
		let mut stack = self.stack.lock();
		match stack.last_mut() {
			Some(top) => *top = screen,
			None => stack.push(screen),
		}
		tracing::debug!(screen = %screen, "replaced current screen");
		Ok(())
	}

	fn back(&self) -> Result<ScreenId, NavigationError> {
		let mut stack = self.stack.lock();
		if stack.len() <= 1 {
			return Err(NavigationError::AtRoot(top_of(&stack)));
		}
		stack.pop();
		Ok(top_of(&stack))
	}

	fn current(&self) -> ScreenId {
		top_of(&self.stack.lock())
	}
}

fn top_of(stack: &[ScreenId]) -> ScreenId {
	stack.last().copied().unwrap_or(ScreenId::Home)
}
