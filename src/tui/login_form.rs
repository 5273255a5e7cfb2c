// Login screen state: class list, chosen class and the access token field

use crate::gateway::GatewayError;

/// Class list as loaded at startup
#[derive(Debug, Clone, PartialEq)]
pub enum ClassList {
    Loading,
    /// Blocking error view; there is no retry short of a restart
    Failed(String),
    Ready(Vec<String>),
}

/// Which login control has the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Classes,
    Token,
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub classes: ClassList,
    /// Highlighted row in the class list
    pub cursor: usize,
    /// Class confirmed with Enter
    pub selected: Option<String>,
    pub token: String,
    pub field: LoginField,
    /// A user-info lookup is in flight
    pub submitting: bool,
}

impl LoginForm {
    pub fn new(token: Option<String>) -> Self {
        Self {
            classes: ClassList::Loading,
            cursor: 0,
            selected: None,
            token: token.unwrap_or_default(),
            field: LoginField::Classes,
            submitting: false,
        }
    }

    pub fn set_classes(&mut self, result: Result<Vec<String>, GatewayError>) {
        self.classes = match result {
            Ok(classes) => ClassList::Ready(classes),
            Err(e) => ClassList::Failed(e.to_string()),
        };
        self.cursor = 0;
    }

    fn class_names(&self) -> &[String] {
        match &self.classes {
            ClassList::Ready(classes) => classes,
            _ => &[],
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.class_names().len();
        if len == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    /// Confirm the highlighted class
    pub fn choose_class(&mut self) {
        if let Some(class) = self.class_names().get(self.cursor) {
            self.selected = Some(class.clone());
            self.field = LoginField::Token;
        }
    }

    pub fn toggle_field(&mut self) {
        self.field = match self.field {
            LoginField::Classes => LoginField::Token,
            LoginField::Token => LoginField::Classes,
        };
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_whitespace() {
            self.token.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.token.pop();
    }

    /// Login stays disabled until a class is chosen and a token entered
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.token.trim().is_empty() && !self.submitting
    }

    /// Token rendered as bullets
    pub fn masked_token(&self) -> String {
        "•".repeat(self.token.chars().count())
    }

    /// Clear per-attempt state after logout; the class list stays loaded
    pub fn reset(&mut self) {
        self.selected = None;
        self.field = LoginField::Classes;
        self.submitting = false;
    }
}
