//! Form State Store
//!
//! Per-instance state for `InteractiveForm`, using reactive_stores for
//! field-level reactivity.

use reactive_stores::Store;

/// Name shown before any action runs
pub const DEFAULT_NAME: &str = "Guest";

/// Fixed value written by the "Set Name" action
pub const FIXED_NAME: &str = "Entue";

/// Amount added to age per increment
pub const AGE_STEP: i32 = 2;

/// Four independent state cells
#[derive(Clone, Debug, PartialEq, Store)]
pub struct FormState {
    pub name: String,
    pub age: i32,
    pub is_employed: bool,
    pub typed_text: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            age: 0,
            is_employed: false,
            typed_text: String::new(),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name_action(&mut self) {
        self.name = FIXED_NAME.to_string();
    }

    pub fn increment_age(&mut self) {
        self.age = self.age.wrapping_add(AGE_STEP);
    }

    pub fn toggle_employed(&mut self) {
        self.is_employed = !self.is_employed;
    }

    /// Last write wins; no validation or length limit.
    pub fn on_typing_change(&mut self, new_text: String) {
        self.typed_text = new_text;
    }
}

/// Display label for the employment flag
pub fn employed_label(is_employed: bool) -> &'static str {
    if is_employed { "Yes" } else { "No" }
}

/// Type alias for the form store
pub type FormStore = Store<FormState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = FormState::new();
        assert_eq!(state.name, "Guest");
        assert_eq!(state.age, 0);
        assert!(!state.is_employed);
        assert_eq!(state.typed_text, "");
    }

    #[test]
    fn test_set_name_is_idempotent() {
        let mut state = FormState::new();
        for _ in 0..5 {
            state.set_name_action();
            assert_eq!(state.name, FIXED_NAME);
        }
    }

    #[test]
    fn test_increment_age_steps_by_two() {
        for k in 0..20 {
            let mut state = FormState::new();
            for _ in 0..k {
                state.increment_age();
            }
            assert_eq!(state.age, 2 * k);
        }
    }

    #[test]
    fn test_toggle_employed_parity() {
        for k in 0..10 {
            let mut state = FormState::new();
            for _ in 0..k {
                state.toggle_employed();
            }
            assert_eq!(state.is_employed, k % 2 == 1);
            assert_eq!(employed_label(state.is_employed), if k % 2 == 1 { "Yes" } else { "No" });
        }
    }

    #[test]
    fn test_typing_last_write_wins() {
        let mut state = FormState::new();
        state.on_typing_change("abc".to_string());
        assert_eq!(state.typed_text, "abc");
        state.on_typing_change(String::new());
        assert_eq!(state.typed_text, "");
    }

    #[test]
    fn test_actions_touch_only_their_cell() {
        let mut state = FormState::new();
        state.increment_age();
        assert_eq!(state, FormState { age: 2, ..FormState::default() });

        let mut state = FormState::new();
        state.toggle_employed();
        assert_eq!(state, FormState { is_employed: true, ..FormState::default() });

        let mut state = FormState::new();
        state.on_typing_change("hi".to_string());
        assert_eq!(state, FormState { typed_text: "hi".to_string(), ..FormState::default() });
    }
}
