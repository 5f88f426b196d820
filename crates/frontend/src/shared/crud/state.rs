/// Monotonic ticket source; only the latest ticket's response is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn next(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }

    /// Make every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Creating,
    Editing { id: i64 },
}

/// Everything a panel holds between requests.
///
/// The form values live in their own signal so keystrokes do not touch the
/// table; this struct tracks which response may still be applied.
#[derive(Debug, Clone)]
pub struct PanelState<I, D> {
    pub items: Vec<I>,
    pub modal: ModalState,
    pub viewing: Option<D>,
    pub is_loaded: bool,
    pub loading: bool,
    pub saving: bool,
    list_generation: RequestGeneration,
    detail_generation: RequestGeneration,
}

impl<I, D> Default for PanelState<I, D> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            modal: ModalState::Closed,
            viewing: None,
            is_loaded: false,
            loading: false,
            saving: false,
            list_generation: RequestGeneration::default(),
            detail_generation: RequestGeneration::default(),
        }
    }
}

impl<I, D> PanelState<I, D> {
    pub fn begin_load(&mut self) -> u64 {
        self.loading = true;
        self.list_generation.next()
    }

    /// Replace all rows. Returns `false` (and changes nothing) for a stale ticket.
    pub fn apply_items(&mut self, ticket: u64, items: Vec<I>) -> bool {
        if !self.list_generation.is_current(ticket) {
            return false;
        }
        self.items = items;
        self.is_loaded = true;
        self.loading = false;
        true
    }

    /// A failed load keeps the previous rows. Returns whether the failure
    /// belongs to the latest load (and so should be reported).
    pub fn fail_load(&mut self, ticket: u64) -> bool {
        if !self.list_generation.is_current(ticket) {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn open_create(&mut self) {
        self.detail_generation.invalidate();
        self.viewing = None;
        self.modal = ModalState::Creating;
    }

    /// Start fetching a detail record for the edit or view modal.
    pub fn begin_detail(&mut self) -> u64 {
        self.detail_generation.next()
    }

    pub fn open_edit(&mut self, ticket: u64, id: i64) -> bool {
        if !self.detail_generation.is_current(ticket) {
            return false;
        }
        self.viewing = None;
        self.modal = ModalState::Editing { id };
        true
    }

    pub fn open_view(&mut self, ticket: u64, detail: D) -> bool {
        if !self.detail_generation.is_current(ticket) {
            return false;
        }
        self.modal = ModalState::Closed;
        self.viewing = Some(detail);
        true
    }

    pub fn detail_is_current(&self, ticket: u64) -> bool {
        self.detail_generation.is_current(ticket)
    }

    /// Whether a failed detail fetch should still be reported; a closed or
    /// replaced modal makes it stale.
    pub fn fail_detail(&self, ticket: u64) -> bool {
        self.detail_is_current(ticket)
    }

    /// Cancel, close icon, overlay click and successful submit all end here.
    pub fn close_modal(&mut self) {
        self.detail_generation.invalidate();
        self.modal = ModalState::Closed;
        self.viewing = None;
        self.saving = false;
    }

    /// `None` while a submit is already in flight, otherwise the ticket of
    /// the modal being submitted.
    pub fn begin_save(&mut self) -> Option<u64> {
        if self.saving {
            return None;
        }
        self.saving = true;
        Some(self.detail_generation.current())
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }

    /// Close after a successful submit, unless the submitted modal was
    /// closed or another one opened meanwhile.
    pub fn close_saved(&mut self, ticket: u64) -> bool {
        if !self.detail_generation.is_current(ticket) || self.modal == ModalState::Closed {
            return false;
        }
        self.close_modal();
        true
    }
}
