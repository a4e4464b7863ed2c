//! What gets animated: engine families and the subjects inside a control

use std::fmt;

/// Control family an engine is responsible for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EngineKind {
    /// Generic hover/focus/press/enable state of any widget
    WidgetState,
    ScrollBar,
    SpinBox,
    Dial,
    TabBar,
    HeaderView,
    /// Busy (indeterminate) progress indicators
    BusyIndicator,
}

impl EngineKind {
    pub const COUNT: usize = 7;

    pub const ALL: [EngineKind; Self::COUNT] = [
        EngineKind::WidgetState,
        EngineKind::ScrollBar,
        EngineKind::SpinBox,
        EngineKind::Dial,
        EngineKind::TabBar,
        EngineKind::HeaderView,
        EngineKind::BusyIndicator,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// How states in this engine move over time
    pub fn motion(self) -> Motion {
        match self {
            EngineKind::BusyIndicator => Motion::Cyclic,
            _ => Motion::Transition,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EngineKind::WidgetState => "widget-state",
            EngineKind::ScrollBar => "scrollbar",
            EngineKind::SpinBox => "spinbox",
            EngineKind::Dial => "dial",
            EngineKind::TabBar => "tabbar",
            EngineKind::HeaderView => "headerview",
            EngineKind::BusyIndicator => "busy-indicator",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interaction condition of a whole widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationMode {
    Hover,
    Focus,
    Pressed,
    Enable,
}

impl AnimationMode {
    pub const ALL: [AnimationMode; 4] = [
        AnimationMode::Hover,
        AnimationMode::Focus,
        AnimationMode::Pressed,
        AnimationMode::Enable,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnimationMode::Hover => "hover",
            AnimationMode::Focus => "focus",
            AnimationMode::Pressed => "pressed",
            AnimationMode::Enable => "enable",
        }
    }
}

impl fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hoverable part of a composite control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubControl {
    /// Scrollbar "add line" arrow
    AddLine,
    /// Scrollbar "sub line" arrow
    SubLine,
    /// Scrollbar slider
    Slider,
    /// Scrollbar groove
    Groove,
    /// Spin box up button
    Up,
    /// Spin box down button
    Down,
    /// Dial handle
    Handle,
}

/// The thing tracked by one animation state inside a control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subject {
    Mode(AnimationMode),
    SubControl(SubControl),
    /// Tab or header section index
    Index(u32),
    Busy,
}

impl From<AnimationMode> for Subject {
    fn from(mode: AnimationMode) -> Self {
        Subject::Mode(mode)
    }
}

impl From<SubControl> for Subject {
    fn from(sub: SubControl) -> Self {
        Subject::SubControl(sub)
    }
}

/// Progress behavior of an animation state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Fades between 0 and 1 and stops at the target
    Transition,
    /// Wraps around 0..1 for as long as the condition holds
    Cyclic,
}
