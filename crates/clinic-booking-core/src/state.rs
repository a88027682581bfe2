//! Page-scoped UI state.

use std::collections::HashMap;

use crate::bootstrap::PageKind;
use crate::models::Doctor;
use crate::view::TimerHandle;

/// The doctor currently picked on the appointment page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    doctor: Option<SelectedDoctor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedDoctor {
    pub id: u32,
    pub name: String,
}

impl SelectionState {
    pub fn select(&mut self, doctor: &Doctor) {
        self.doctor = Some(SelectedDoctor {
            id: doctor.id,
            name: doctor.name.to_string(),
        });
    }

    pub fn clear(&mut self) {
        self.doctor = None;
    }

    pub fn selected(&self) -> Option<&SelectedDoctor> {
        self.doctor.as_ref()
    }
}

/// Pending hide timer per message panel. At most one per panel.
#[derive(Debug, Clone, Default)]
pub struct PanelTimers {
    pending: HashMap<String, TimerHandle>,
}

impl PanelTimers {
    /// Record `handle` for `panel`, returning the handle it supersedes.
    pub fn replace(&mut self, panel: &str, handle: TimerHandle) -> Option<TimerHandle> {
        self.pending.insert(panel.to_string(), handle)
    }

    /// Take the pending handle for `panel`, if any.
    pub fn take(&mut self, panel: &str) -> Option<TimerHandle> {
        self.pending.remove(panel)
    }

    pub fn get(&self, panel: &str) -> Option<TimerHandle> {
        self.pending.get(panel).copied()
    }
}

/// All mutable state of one loaded page.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub selection: SelectionState,
    pub timers: PanelTimers,
    /// Pages detected at boot
    pub pages: Vec<PageKind>,
}

impl PageState {
    /// Forget the selection. Timers and detected pages are kept.
    pub fn reset(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DOCTORS;

    #[test]
    fn test_selection() {
        let mut state = PageState::default();
        assert!(state.selection.selected().is_none());

        state.selection.select(&DOCTORS[0]);
        state.selection.select(&DOCTORS[2]);
        assert_eq!(state.selection.selected().unwrap().id, 103);

        state.reset();
        assert!(state.selection.selected().is_none());
    }

    #[test]
    fn test_panel_timers_replace() {
        let mut timers = PanelTimers::default();
        assert_eq!(timers.replace("p", TimerHandle(1)), None);
        assert_eq!(timers.replace("p", TimerHandle(2)), Some(TimerHandle(1)));
        assert_eq!(timers.get("p"), Some(TimerHandle(2)));
        assert_eq!(timers.take("p"), Some(TimerHandle(2)));
        assert_eq!(timers.take("p"), None);
    }
}
