/// Which way the active group moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Previous,
}

/// Notification raised whenever the active setting group changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub previous_group: String,
    pub current_group: String,
    pub direction: CycleDirection,
}

impl ChangeEvent {
    pub fn new(
        previous_group: impl Into<String>,
        current_group: impl Into<String>,
        direction: CycleDirection,
    ) -> Self {
        Self {
            previous_group: previous_group.into(),
            current_group: current_group.into(),
            direction,
        }
    }
}
