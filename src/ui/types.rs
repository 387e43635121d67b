#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    Main,
    ColorPicker,
    PopupOpen,
    PeerInfo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
    Coffee,
    ProjectInfo,
}

/// Named hit boxes. Color swatches are resolved separately because a hit
/// also yields the swatch color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    CoffeeButton,
    InfoButton,
    DebugPanel,
    DebugToggleButton,
    ResetButton,
    EraserButton,
    EraserSlider,
    PeerInfoButton,
    CustomColorButton,
    ScreenshotButton,
    PeerInfoBackButton,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repaint {
    MainScreen,
    BrushIndicator,
    EraserButton,
    EraserSlider,
}
