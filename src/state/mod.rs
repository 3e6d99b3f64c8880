pub mod submission;

use crate::api::SubmissionTransport;
use leptos::html;
use leptos::prelude::*;
use std::rc::Rc;
use strum::Display;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Encoding,
    Dispatching,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    pub fn can_advance_to(self, next: SubmissionPhase) -> bool {
        use SubmissionPhase::*;

        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Encoding)
                | (Validating, Idle)
                | (Encoding, Dispatching)
                | (Encoding, Failed)
                | (Dispatching, Succeeded)
                | (Dispatching, Failed)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }

    /// Submit button is disabled and relabelled while the payload is built
    /// and sent.
    pub fn is_busy(self) -> bool {
        matches!(
            self,
            SubmissionPhase::Encoding
                | SubmissionPhase::Dispatching
                | SubmissionPhase::Succeeded
                | SubmissionPhase::Failed
        )
    }
}

/// Re-entrancy guards shared by the upload widget and the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Guards {
    file_processing: bool,
    phase: SubmissionPhase,
}

impl Guards {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_file_processing(&self) -> bool {
        self.file_processing
    }

    pub fn is_submitting(&self) -> bool {
        self.phase != SubmissionPhase::Idle
    }

    pub fn can_open_picker(&self) -> bool {
        !self.file_processing && !self.is_submitting()
    }

    /// Returns false if a selection is already being processed.
    pub fn begin_file_processing(&mut self) -> bool {
        if self.file_processing {
            return false;
        }
        self.file_processing = true;
        true
    }

    pub fn end_file_processing(&mut self) {
        self.file_processing = false;
    }

    /// Idle -> Validating. Returns false (and changes nothing) while another
    /// submission is in flight.
    pub fn begin_submission(&mut self) -> bool {
        self.advance(SubmissionPhase::Validating)
    }

    pub fn advance(&mut self, next: SubmissionPhase) -> bool {
        if !self.phase.can_advance_to(next) {
            return false;
        }
        self.phase = next;
        true
    }

    /// Terminal step of every submission path.
    pub fn finish_submission(&mut self) {
        self.phase = SubmissionPhase::Idle;
    }
}

#[derive(Clone)]
pub struct PageState {
    pub guards: RwSignal<Guards>,
    pub nav_open: RwSignal<bool>,

    /// File names shown under the upload area.
    pub preview: RwSignal<Vec<String>>,

    /// Hidden `<input type="file">` owned by the upload widget.
    pub file_input: NodeRef<html::Input>,

    pub transport: StoredValue<Rc<dyn SubmissionTransport>, LocalStorage>,
}

impl PageState {
    pub fn new(transport: Rc<dyn SubmissionTransport>) -> Self {
        Self {
            guards: RwSignal::new(Guards::default()),
            nav_open: RwSignal::new(false),
            preview: RwSignal::new(vec![]),
            file_input: NodeRef::new(),
            transport: StoredValue::new_local(transport),
        }
    }

    pub fn clear_file_input(&self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }
}

#[derive(Clone)]
pub struct PageContext(pub PageState);
