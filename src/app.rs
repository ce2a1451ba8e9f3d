use crate::confirm::{Confirm, ConfirmPrompt, ModalAnswer};
use crate::domain::{items_in_context, Context, Item, ItemCollection, ItemId, UiMode};
use crate::error::AppError;
use crate::persistence::{FileStore, KeyValueStore, Persistence, PersistenceError, StoredKeys};
use tracing::{debug, error, info, warn};

/// Edit dialog state
#[derive(Debug, Clone)]
pub struct EditFormState {
    pub id: ItemId,
    pub text: String,
}

/// Main application state
pub struct AppState<S: KeyValueStore = FileStore> {
    pub items: ItemCollection,
    pub context: Context,
    pub input: String,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub edit_form: Option<EditFormState>,
    pub pending_delete: Option<ItemId>,
    /// Last storage failure, cleared by the next successful write
    pub status: Option<String>,
    persistence: Persistence<S>,
    stored_keys: StoredKeys,
    /// Whether the context key has been written at least once
    context_stored: bool,
}

impl<S: KeyValueStore> AppState<S> {
    /// Hydrate from storage (defaults when nothing complete is stored)
    pub fn load(persistence: Persistence<S>) -> Result<Self, AppError> {
        let (snapshot, stored_keys) = persistence.load()?;
        Ok(Self {
            items: snapshot.items,
            context: snapshot.context,
            input: String::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            edit_form: None,
            pending_delete: None,
            status: None,
            persistence,
            stored_keys,
            context_stored: stored_keys == StoredKeys::Both,
        })
    }

    #[cfg(test)]
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    #[cfg(test)]
    pub fn persistence_mut(&mut self) -> &mut Persistence<S> {
        &mut self.persistence
    }

    /// Items of the active context, in display order
    pub fn visible_items(&self) -> Vec<&Item> {
        items_in_context(&self.items, self.context)
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_items().get(self.selected_index).copied()
    }

    fn selected_id(&self) -> Option<ItemId> {
        self.selected_item().map(|item| item.id.clone())
    }

    /// Write the hydrated state back so both keys exist after startup.
    ///
    /// Skipped when only one key was stored: that value is left untouched.
    pub fn sync_storage(&mut self) {
        if self.stored_keys == StoredKeys::Partial {
            info!("one stored key missing, leaving stored data as is");
            return;
        }
        let result = self
            .persistence
            .save_items(&self.items)
            .and_then(|()| self.persistence.save_context(self.context));
        if result.is_ok() {
            self.context_stored = true;
        }
        self.record_save(result);
    }

    // ---- context toggle ----

    pub fn select_work(&mut self) {
        self.set_context(Context::Work);
    }

    pub fn select_travel(&mut self) {
        self.set_context(Context::Travel);
    }

    pub fn toggle_context(&mut self) {
        self.set_context(self.context.toggled());
    }

    fn set_context(&mut self, context: Context) {
        self.context = context;
        self.selected_index = 0;
        debug!(context = context.name(), "context selected");
        let result = self.persistence.save_context(context);
        if result.is_ok() {
            self.context_stored = true;
        }
        self.record_save(result);
    }

    // ---- item operations ----

    /// Add an item to the active context. Blank text is ignored.
    pub fn add_item(&mut self, text: &str) -> Option<ItemId> {
        if text.trim().is_empty() {
            return None;
        }

        let item = Item::new(text.to_string(), self.context);
        let id = item.id.clone();
        debug!(id = %id, context = self.context.name(), "item added");
        self.items.insert(id.clone(), item);
        self.persist_items();
        self.input.clear();
        self.selected_index = self.visible_items().len().saturating_sub(1);
        Some(id)
    }

    /// Replace the text of an existing item
    pub fn edit_item(&mut self, id: &ItemId, new_text: &str) -> Result<(), AppError> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| AppError::MissingItem(id.clone()))?;
        item.text = new_text.to_string();
        debug!(id = %id, "item edited");
        self.persist_items();
        Ok(())
    }

    pub fn toggle_complete(&mut self, id: &ItemId) -> Result<(), AppError> {
        let item = self
            .items
            .get_mut(id)
            .ok_or_else(|| AppError::MissingItem(id.clone()))?;
        item.toggle_completed();
        debug!(id = %id, completed = item.completed, "item toggled");
        self.persist_items();
        Ok(())
    }

    /// Delete an item once `confirm` agrees. Returns whether it was deleted.
    pub fn delete_item(&mut self, id: &ItemId, confirm: &mut dyn Confirm) -> Result<bool, AppError> {
        if !self.items.contains_key(id) {
            return Err(AppError::MissingItem(id.clone()));
        }
        if !confirm.confirm(&ConfirmPrompt::DELETE_ITEM) {
            debug!(id = %id, "delete cancelled");
            return Ok(false);
        }

        self.items.shift_remove(id);
        debug!(id = %id, "item deleted");
        self.persist_items();
        self.input.clear();
        self.clamp_selection();
        Ok(true)
    }

    /// Items are written first; the context key follows until it exists,
    /// so a stored collection always has a context next to it.
    fn persist_items(&mut self) {
        let mut result = self.persistence.save_items(&self.items);
        if result.is_ok() && !self.context_stored {
            result = self.persistence.save_context(self.context);
            if result.is_ok() {
                self.context_stored = true;
            }
        }
        self.record_save(result);
    }

    /// The in-memory change stands either way; failures are only reported.
    fn record_save(&mut self, result: Result<(), PersistenceError>) {
        match result {
            Ok(()) => self.status = None,
            Err(e) => {
                error!(error = %e, "failed to save");
                self.status = Some(format!("Not saved: {}", e));
            }
        }
    }

    // ---- selection ----

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let len = self.visible_items().len();
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_items().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            if let Err(e) = self.toggle_complete(&id) {
                warn!(error = %e, "toggle failed");
            }
        }
    }

    // ---- input field ----

    pub fn start_typing(&mut self) {
        self.ui_mode = UiMode::Typing;
    }

    pub fn stop_typing(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Enter in the input field
    pub fn submit_input(&mut self) {
        let text = self.input.clone();
        self.add_item(&text);
    }

    // ---- edit dialog ----

    pub fn start_edit_selected(&mut self) {
        let form = self.selected_item().map(|item| EditFormState {
            id: item.id.clone(),
            text: item.text.clone(),
        });
        if form.is_some() {
            self.edit_form = form;
            self.ui_mode = UiMode::EditingItem;
        }
    }

    pub fn edit_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.edit_form {
            form.text.push(c);
        }
    }

    pub fn edit_form_backspace(&mut self) {
        if let Some(form) = &mut self.edit_form {
            form.text.pop();
        }
    }

    /// Commit the edit; blank text counts as cancel
    pub fn submit_edit_form(&mut self) {
        if let Some(form) = self.edit_form.take() {
            if !form.text.trim().is_empty() {
                if let Err(e) = self.edit_item(&form.id, &form.text) {
                    warn!(error = %e, "edit failed");
                }
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_edit_form(&mut self) {
        self.edit_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // ---- delete dialog ----

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.pending_delete = Some(id);
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    /// Feed the modal's answer back into `delete_item`
    pub fn resolve_delete(&mut self, confirmed: bool) {
        if let Some(id) = self.pending_delete.take() {
            if let Err(e) = self.delete_item(&id, &mut ModalAnswer(confirmed)) {
                warn!(error = %e, "delete failed");
            }
        }
        self.ui_mode = UiMode::Normal;
    }
}
