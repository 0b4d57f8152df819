use std::fmt;

/// One access step from the conversion root to a nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Record field or stringified mapping key access.
	Field(String),
	/// Zero-based sequence index access.
	Index(usize),
}

impl fmt::Display for PathStep {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PathStep::Field(name) => write!(f, ".{name}"),
			PathStep::Index(index) => write!(f, "[{index}]"),
		}
	}
}

/// Ordered access path used to qualify conversion errors.
///
/// Renders as the concatenation of its steps, e.g. `.p[0].name`. The root
/// path is empty and renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Path from an already-built step sequence.
	pub fn new(steps: Vec<PathStep>) -> Self {
		Self { steps }
	}

	/// The empty root path.
	pub fn root() -> Self {
		Self::default()
	}

	/// True for the root path.
	pub fn is_root(&self) -> bool {
		self.steps.is_empty()
	}
}

impl From<Vec<PathStep>> for FieldPath {
	fn from(steps: Vec<PathStep>) -> Self {
		Self::new(steps)
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for step in &self.steps {
			write!(f, "{step}")?;
		}
		Ok(())
	}
}
