use std::path::PathBuf;

/// A modal message: error, or confirmation after a save.
pub struct MessageDialog {
    pub title: String,
    pub message: String,
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Dialog currently shown, if any.
    pub dialog: Option<MessageDialog>,

    /// Whether the primary display size has been read into the session.
    pub display_resolved: bool,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn show_dialog(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.dialog = Some(MessageDialog {
            title: title.into(),
            message: message.into(),
        });
    }
}
