//! Modal stack for managing overlays
//!
//! An enum-based stack rather than per-overlay boolean flags; only the
//! top modal receives input events.

/// Represents a modal overlay displayed on top of the main screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog listing all keyboard shortcuts
    Help { scroll_offset: usize },
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Get a mutable reference to the top modal
    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::Help { scroll_offset: 0 });

        assert_eq!(stack.pop(), Some(Modal::Help { scroll_offset: 0 }));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_stack_top_mut() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help { scroll_offset: 0 });

        if let Some(Modal::Help { scroll_offset }) = stack.top_mut() {
            *scroll_offset = 3;
        }

        assert_eq!(stack.top(), Some(&Modal::Help { scroll_offset: 3 }));
    }
}
