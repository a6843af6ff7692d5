use crate::view::View;

/// Messages for the HydroSight application.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Simulation timer fired.
    Tick,

    /// User navigated to a screen.
    Navigate(View),

    /// User dismissed the repair overlay.
    CloseRepair,

    /// The repair wizard's simulated scan finished.
    RepairScanElapsed,

    /// User pressed the repair wizard's action button.
    RepairAction,

    /// Pointer moved over a different grid sensor (or off all of them).
    HoverSensor(Option<usize>),

    // Settings messages
    /// Ghost Hunter sensitivity slider moved.
    SetLeakSensitivity(u8),

    /// Reset settings to defaults.
    ResetSettings,
}
