use std::fmt;

/// User input rejected before it reaches the core, e.g. a campaign form with
/// missing required fields. Carried inside `anyhow::Error` and recovered with
/// `downcast_ref` at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: &'static str,
    pub fields: Vec<&'static str>,
}

impl ValidationError {
    pub fn new(message: &'static str, fields: Vec<&'static str>) -> Self {
        Self { message, fields }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            f.write_str(self.message)
        } else {
            write!(f, "{} ({})", self.message, self.fields.join(", "))
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError {
    pub kind: &'static str,
    pub id: String,
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} not found (id={})", self.kind, self.id)
    }
}

impl std::error::Error for NotFoundError {}
