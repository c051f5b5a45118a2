/// Side effects the main loop performs after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Re-render the component with the next colour from the palette.
    CycleButtonsColor,
    /// Persist the current props back to the config file.
    SaveConfig,
    Quit,
}
