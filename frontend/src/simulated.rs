use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Start,
    Finish,
    Revert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    InProgress,
    Success,
}

impl UploadStatus {
    pub fn transition(self, action: StatusAction) -> Option<Self> {
        match (self, action) {
            // A new photo may be picked while the previous success banner shows.
            (UploadStatus::Idle | UploadStatus::Success, StatusAction::Start) => {
                Some(UploadStatus::InProgress)
            }
            (UploadStatus::InProgress, StatusAction::Finish) => Some(UploadStatus::Success),
            (UploadStatus::Success, StatusAction::Revert) => Some(UploadStatus::Idle),
            _ => None,
        }
    }

    pub fn is_busy(self) -> bool {
        self == UploadStatus::InProgress
    }
}

impl Reducible for UploadStatus {
    type Action = StatusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.transition(action) {
            Some(next) => {
                log::debug!("upload {:?}: {:?} -> {:?}", action, *self, next);
                Rc::new(next)
            }
            None => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    InProgress,
    Success,
    // Rendered by the contact page; the simulated submission never fails.
    #[allow(dead_code)]
    Error,
}

impl SubmitStatus {
    pub fn transition(self, action: StatusAction) -> Option<Self> {
        match (self, action) {
            (SubmitStatus::Idle, StatusAction::Start) => Some(SubmitStatus::InProgress),
            (SubmitStatus::InProgress, StatusAction::Finish) => Some(SubmitStatus::Success),
            (SubmitStatus::Success | SubmitStatus::Error, StatusAction::Revert) => {
                Some(SubmitStatus::Idle)
            }
            _ => None,
        }
    }

    pub fn is_busy(self) -> bool {
        self == SubmitStatus::InProgress
    }
}

impl Reducible for SubmitStatus {
    type Action = StatusAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.transition(action) {
            Some(next) => {
                log::debug!("submit {:?}: {:?} -> {:?}", action, *self, next);
                Rc::new(next)
            }
            None => self,
        }
    }
}

// Every new run and every teardown bumps the counter, so older tickets stop
// acting on component state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation(Rc<Cell<u32>>);

impl Generation {
    pub fn issue(&self) -> Ticket {
        self.invalidate();
        Ticket {
            shared: self.0.clone(),
            issued: self.0.get(),
        }
    }

    pub fn invalidate(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    shared: Rc<Cell<u32>>,
    issued: u32,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.shared.get() == self.issued
    }
}

/// Runs `on_finish` after `delay_ms`, then `on_revert` after another
/// `display_ms`, skipping whatever remains once the ticket is retired.
pub fn run_scripted<F, R>(ticket: Ticket, delay_ms: u32, display_ms: u32, on_finish: F, on_revert: R)
where
    F: FnOnce() + 'static,
    R: FnOnce() + 'static,
{
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if !ticket.is_current() {
            log::debug!("scripted action cancelled before finishing");
            return;
        }
        on_finish();

        TimeoutFuture::new(display_ms).await;
        if !ticket.is_current() {
            return;
        }
        on_revert();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_walks_idle_busy_success_idle() {
        let status = UploadStatus::default();
        let status = status.transition(StatusAction::Start).unwrap();
        assert!(status.is_busy());
        let status = status.transition(StatusAction::Finish).unwrap();
        assert_eq!(status, UploadStatus::Success);
        let status = status.transition(StatusAction::Revert).unwrap();
        assert_eq!(status, UploadStatus::Idle);
    }

    #[test]
    fn upload_rejects_second_start_while_busy() {
        assert_eq!(UploadStatus::InProgress.transition(StatusAction::Start), None);
        assert_eq!(
            UploadStatus::Success.transition(StatusAction::Start),
            Some(UploadStatus::InProgress)
        );
    }

    #[test]
    fn upload_finish_and_revert_need_matching_state() {
        assert_eq!(UploadStatus::Idle.transition(StatusAction::Finish), None);
        assert_eq!(UploadStatus::Idle.transition(StatusAction::Revert), None);
        assert_eq!(UploadStatus::InProgress.transition(StatusAction::Revert), None);
    }

    #[test]
    fn submit_only_starts_from_idle() {
        assert_eq!(
            SubmitStatus::Idle.transition(StatusAction::Start),
            Some(SubmitStatus::InProgress)
        );
        assert_eq!(SubmitStatus::InProgress.transition(StatusAction::Start), None);
        assert_eq!(SubmitStatus::Success.transition(StatusAction::Start), None);
        assert_eq!(SubmitStatus::Error.transition(StatusAction::Start), None);
    }

    #[test]
    fn submit_reverts_from_success_or_error() {
        assert_eq!(
            SubmitStatus::Success.transition(StatusAction::Revert),
            Some(SubmitStatus::Idle)
        );
        assert_eq!(
            SubmitStatus::Error.transition(StatusAction::Revert),
            Some(SubmitStatus::Idle)
        );
        assert_eq!(SubmitStatus::InProgress.transition(StatusAction::Revert), None);
    }

    #[test]
    fn reducer_keeps_rc_on_rejected_action() {
        let status = Rc::new(SubmitStatus::Idle);
        let same = status.clone().reduce(StatusAction::Finish);
        assert!(Rc::ptr_eq(&status, &same));
        let next = same.reduce(StatusAction::Start);
        assert_eq!(*next, SubmitStatus::InProgress);
    }

    #[test]
    fn newer_ticket_retires_older_one() {
        let generation = Generation::default();
        let first = generation.issue();
        assert!(first.is_current());
        let second = generation.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn invalidate_retires_outstanding_ticket() {
        let generation = Generation::default();
        let ticket = generation.issue();
        generation.clone().invalidate();
        assert!(!ticket.is_current());
    }
}
