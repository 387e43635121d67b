use statig::prelude::*;

use super::types::{PopupKind, UiMode};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum ScreenCommand {
    ShowPopup(PopupKind),
    HidePopup(PopupKind),
    OpenColorPicker,
    CloseColorPicker,
    ShowPeerInfo,
    HidePeerInfo,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum ScreenApplyStatus {
    Applied,
    Unchanged,
    InvalidTransition,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct ScreenSnapshot {
    pub(super) mode: UiMode,
    pub(super) coffee_popup: bool,
    pub(super) info_popup: bool,
}

impl ScreenSnapshot {
    pub(super) fn visible_popup(self) -> Option<PopupKind> {
        if self.coffee_popup {
            Some(PopupKind::Coffee)
        } else if self.info_popup {
            Some(PopupKind::ProjectInfo)
        } else {
            None
        }
    }

    fn set_popup(&mut self, kind: PopupKind, visible: bool) {
        match kind {
            PopupKind::Coffee => self.coffee_popup = visible,
            PopupKind::ProjectInfo => self.info_popup = visible,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(super) struct ScreenMachine {
    pub(super) snapshot: ScreenSnapshot,
}

#[derive(Clone, Copy, Debug)]
pub(super) struct DispatchContext {
    pub(super) status: ScreenApplyStatus,
}

impl Default for DispatchContext {
    fn default() -> Self {
        Self {
            status: ScreenApplyStatus::Unchanged,
        }
    }
}

impl ScreenMachine {
    pub(super) fn new() -> Self {
        Self {
            snapshot: ScreenSnapshot::default(),
        }
    }

    fn enter(&mut self, context: &mut DispatchContext, mode: UiMode) {
        self.snapshot.mode = mode;
        context.status = ScreenApplyStatus::Applied;
    }
}

#[state_machine(initial = "State::main()")]
impl ScreenMachine {
    #[state]
    fn main(&mut self, context: &mut DispatchContext, event: &ScreenCommand) -> Outcome<State> {
        match event {
            ScreenCommand::ShowPopup(kind) => {
                self.snapshot.set_popup(*kind, true);
                self.enter(context, UiMode::PopupOpen);
                Transition(State::popup())
            }
            ScreenCommand::OpenColorPicker => {
                self.enter(context, UiMode::ColorPicker);
                Transition(State::color_picker())
            }
            ScreenCommand::ShowPeerInfo => {
                self.enter(context, UiMode::PeerInfo);
                Transition(State::peer_info())
            }
            ScreenCommand::HidePopup(_)
            | ScreenCommand::CloseColorPicker
            | ScreenCommand::HidePeerInfo => Handled,
        }
    }

    #[state]
    fn popup(&mut self, context: &mut DispatchContext, event: &ScreenCommand) -> Outcome<State> {
        match event {
            ScreenCommand::ShowPopup(kind) => {
                self.snapshot.set_popup(*kind, true);
                context.status = ScreenApplyStatus::Applied;
                Handled
            }
            ScreenCommand::HidePopup(kind) => {
                self.snapshot.set_popup(*kind, false);
                context.status = ScreenApplyStatus::Applied;
                if self.snapshot.visible_popup().is_none() {
                    self.snapshot.mode = UiMode::Main;
                    Transition(State::main())
                } else {
                    Handled
                }
            }
            _ => {
                context.status = ScreenApplyStatus::InvalidTransition;
                Handled
            }
        }
    }

    #[state]
    fn color_picker(
        &mut self,
        context: &mut DispatchContext,
        event: &ScreenCommand,
    ) -> Outcome<State> {
        match event {
            ScreenCommand::CloseColorPicker => {
                self.enter(context, UiMode::Main);
                Transition(State::main())
            }
            _ => {
                context.status = ScreenApplyStatus::InvalidTransition;
                Handled
            }
        }
    }

    #[state]
    fn peer_info(
        &mut self,
        context: &mut DispatchContext,
        event: &ScreenCommand,
    ) -> Outcome<State> {
        match event {
            ScreenCommand::HidePeerInfo => {
                self.enter(context, UiMode::Main);
                Transition(State::main())
            }
            _ => {
                context.status = ScreenApplyStatus::InvalidTransition;
                Handled
            }
        }
    }
}
