// Input DTOs for the command layer
// Date and time arrive as raw text from the prompt and are validated here,
// not at the prompt.

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub category: String,
}

/// Per-field event update. `None` keeps the current value, mirroring the
/// edit prompt where an empty reply leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct EventUpdate {
    pub name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}
