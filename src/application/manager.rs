//! Generic per-kind CRUD manager.
//!
//! One state machine covers all five content kinds: an authoritative cached
//! list, a live search term, a single open form slot, and a two-step delete
//! confirmation. The cache is transient by contract — every successful
//! mutation discards it and re-fetches the full list; nothing is patched
//! incrementally.
//!
//! Failure policy is uniform across kinds: load failures keep the stale
//! list visible, submit failures keep the form open with the draft intact,
//! and a failed delete keeps the confirmation pending so the operator can
//! retry. Every failure is logged and surfaced as an inline error message.

use tracing::error;

use crate::application::resource::{ContentRecord, ResourceClient, matches_term};

/// The manager's single form slot: at most one create or edit in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSlot<D> {
    Closed,
    Create(D),
    Edit { id: String, draft: D },
}

pub struct ManagerState<C: ResourceClient> {
    client: C,
    items: Vec<C::Record>,
    loading: bool,
    search: String,
    form: FormSlot<C::Draft>,
    pending_delete: Option<String>,
    submitting: bool,
    error: Option<String>,
}

impl<C: ResourceClient> ManagerState<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            items: Vec::new(),
            loading: false,
            search: String::new(),
            form: FormSlot::Closed,
            pending_delete: None,
            submitting: false,
            error: None,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Replace the cached list with a fresh fetch. On failure the stale
    /// list stays visible; the error is logged and surfaced inline.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.client.list_all().await {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                error!(kind = C::KIND, error = %err, "failed to load items");
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    pub fn items(&self) -> &[C::Record] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// The view list: cached items matching the live search term.
    pub fn filtered(&self) -> Vec<&C::Record> {
        self.items
            .iter()
            .filter(|record| matches_term(*record, &self.search))
            .collect()
    }

    pub fn open_create(&mut self, draft: C::Draft) {
        self.form = FormSlot::Create(draft);
        self.error = None;
    }

    /// Open the form seeded for an existing record. The caller supplies the
    /// seeded draft (see `application::forms`); the manager remembers which
    /// id the edit targets.
    pub fn open_edit(&mut self, record: &C::Record, draft: C::Draft) {
        self.form = FormSlot::Edit {
            id: record.id().to_string(),
            draft,
        };
        self.error = None;
    }

    pub fn form(&self) -> &FormSlot<C::Draft> {
        &self.form
    }

    pub fn draft_mut(&mut self) -> Option<&mut C::Draft> {
        match &mut self.form {
            FormSlot::Closed => None,
            FormSlot::Create(draft) | FormSlot::Edit { draft, .. } => Some(draft),
        }
    }

    /// Cancel the open form, discarding the draft.
    pub fn close_form(&mut self) {
        self.form = FormSlot::Closed;
        self.error = None;
    }

    /// Submit the open form. A no-op while a submission is already in
    /// flight or when no form is open. Success costs one full list
    /// re-fetch and closes the form; failure keeps the form open with the
    /// operator's draft intact.
    pub async fn submit(&mut self) {
        if self.submitting {
            return;
        }
        let (target, draft) = match &self.form {
            FormSlot::Closed => return,
            FormSlot::Create(draft) => (None, draft.clone()),
            FormSlot::Edit { id, draft } => (Some(id.clone()), draft.clone()),
        };

        self.submitting = true;
        let result = match target {
            Some(id) => self.client.update(&id, draft).await,
            None => self.client.create(draft).await,
        };

        match result {
            Ok(_) => {
                self.error = None;
                self.load().await;
                self.form = FormSlot::Closed;
            }
            Err(err) => {
                error!(kind = C::KIND, error = %err, "failed to save item");
                self.error = Some(err.to_string());
            }
        }
        self.submitting = false;
    }

    /// First step of deletion: remember the target, await confirmation.
    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.pending_delete = Some(id.into());
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Second step of deletion. Success re-fetches the list and clears the
    /// pending target; failure keeps the confirmation pending and surfaces
    /// the error so the operator can retry.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.clone() else {
            return;
        };
        match self.client.delete(&id).await {
            Ok(()) => {
                self.error = None;
                self.load().await;
                self.pending_delete = None;
            }
            Err(err) => {
                error!(kind = C::KIND, id = %id, error = %err, "failed to delete item");
                self.error = Some(err.to_string());
            }
        }
    }

    #[cfg(test)]
    fn force_submitting(&mut self, value: bool) {
        self.submitting = value;
    }
}
