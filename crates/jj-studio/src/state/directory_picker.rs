//! Directory Picker State

/// Options the picker is opened with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Only directories can be chosen
    pub directory_only: bool,
    /// More than one entry can be chosen
    pub allow_multiple: bool,
    pub title: String,
}

impl PickerConfig {
    /// Configuration for choosing a single repository directory
    pub fn repository(title: impl Into<String>) -> Self {
        Self {
            directory_only: true,
            allow_multiple: false,
            title: title.into(),
        }
    }

    /// Instruction line shown above the path field
    pub fn prompt(&self) -> &'static str {
        match (self.directory_only, self.allow_multiple) {
            (true, false) => "Path of a directory containing a .jj folder:",
            (true, true) => "Paths of directories, separated by spaces:",
            (false, false) => "Path to open:",
            (false, true) => "Paths to open, separated by spaces:",
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::repository("Select Directory")
    }
}

/// State of the directory picker popup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryPickerState {
    pub config: PickerConfig,
    /// Path typed so far
    pub input: String,
}

impl DirectoryPickerState {
    pub fn reset(&mut self) {
        self.input.clear();
    }
}
