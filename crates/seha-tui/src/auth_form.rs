//! Signup form state for the auth screen.
//!
//! Purely cosmetic: validation messages render inline but never block the
//! mock login.

use std::collections::BTreeMap;

use seha_core::session::Role;
use seha_core::validation;

/// One input field in the form.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub secret: bool,
}

const PATIENT_FIELDS: &[Field] = &[
    Field { key: "full_name", label: "Full name", placeholder: "Enter your full name", secret: false },
    Field { key: "email", label: "Email", placeholder: "example@example.com", secret: false },
    Field { key: "phone", label: "Phone", placeholder: "7XXXXXXXX", secret: false },
    Field { key: "password", label: "Password", placeholder: "••••••••", secret: true },
];

const DOCTOR_FIELDS: &[Field] = &[
    Field { key: "full_name", label: "Full name", placeholder: "Enter your full name", secret: false },
    Field { key: "email", label: "Email", placeholder: "example@example.com", secret: false },
    Field { key: "phone", label: "Phone", placeholder: "7XXXXXXXX", secret: false },
    Field { key: "specialty", label: "Specialty", placeholder: "Medical specialty", secret: false },
    Field { key: "password", label: "Password", placeholder: "••••••••", secret: true },
];

/// Keyboard focus inside the form. Slot 0 is the role toggle, slots 1..
/// are the input fields in order.
#[derive(Debug)]
pub struct AuthFormState {
    pub role: Role,
    pub focus: usize,
    pub values: BTreeMap<String, String>,
    pub errors: BTreeMap<String, String>,
}

impl Default for AuthFormState {
    fn default() -> Self {
        Self {
            role: Role::Patient,
            focus: 0,
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
        }
    }
}

impl AuthFormState {
    pub fn fields(&self) -> &'static [Field] {
        match self.role {
            Role::Patient => PATIENT_FIELDS,
            Role::Doctor => DOCTOR_FIELDS,
        }
    }

    pub fn on_role_toggle(&self) -> bool {
        self.focus == 0
    }

    pub fn focused_field(&self) -> Option<Field> {
        self.focus.checked_sub(1).and_then(|i| self.fields().get(i).copied())
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % (self.fields().len() + 1);
    }

    pub fn focus_prev(&mut self) {
        let slots = self.fields().len() + 1;
        self.focus = (self.focus + slots - 1) % slots;
    }

    pub fn toggle_role(&mut self) {
        self.role = match self.role {
            Role::Patient => Role::Doctor,
            Role::Doctor => Role::Patient,
        };
        // The field list changed; keep focus in range.
        self.focus = self.focus.min(self.fields().len());
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            self.values.entry(field.key.to_string()).or_default().push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field()
            && let Some(value) = self.values.get_mut(field.key)
        {
            value.pop();
        }
    }

    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map_or("", String::as_str)
    }

    /// Runs the advisory validation and records the field errors.
    /// Returns the chosen role; the caller logs in regardless of errors.
    pub fn submit(&mut self) -> Role {
        self.errors = validation::validate(&self.values, &validation::signup_rules(self.role));
        self.role
    }

    /// Clears transient state after a successful login.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut form = AuthFormState::default();
        let slots = form.fields().len() + 1;
        for _ in 0..slots {
            form.focus_next();
        }
        assert_eq!(form.focus, 0);
        form.focus_prev();
        assert_eq!(form.focus, slots - 1);
    }

    #[test]
    fn test_toggle_role_keeps_focus_in_range() {
        let mut form = AuthFormState::default();
        form.role = Role::Doctor;
        form.focus = DOCTOR_FIELDS.len(); // last doctor slot
        form.toggle_role();
        assert!(form.focus <= form.fields().len());
    }

    #[test]
    fn test_typing_targets_focused_field() {
        let mut form = AuthFormState::default();
        form.focus = 1; // full_name
        form.insert_char('A');
        form.insert_char('b');
        form.backspace();
        assert_eq!(form.value("full_name"), "A");
    }

    #[test]
    fn test_submit_records_errors_but_returns_role() {
        let mut form = AuthFormState::default();
        let role = form.submit();
        assert_eq!(role, Role::Patient);
        assert!(!form.errors.is_empty());
    }
}
