/// Text of a yes/no question put to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: &'static str,
    pub message: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
}

impl ConfirmPrompt {
    pub const DELETE_ITEM: ConfirmPrompt = ConfirmPrompt {
        title: "Delete To Do?",
        message: "Are you sure?",
        confirm_label: "I'm sure",
        cancel_label: "Cancel",
    };
}

/// Asks the user a yes/no question. `true` means go ahead.
pub trait Confirm {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> bool;
}

/// Answer already collected by the modal dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalAnswer(pub bool);

impl Confirm for ModalAnswer {
    fn confirm(&mut self, _prompt: &ConfirmPrompt) -> bool {
        self.0
    }
}
