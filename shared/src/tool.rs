#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolMode {
    #[default]
    Select,
    Brush,
}

impl ToolMode {
    pub const ALL: [ToolMode; 2] = [ToolMode::Select, ToolMode::Brush];

    pub fn name(self) -> &'static str {
        match self {
            ToolMode::Select => "select",
            ToolMode::Brush => "brush",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolMode::Select => "Select tool",
            ToolMode::Brush => "Brush tool",
        }
    }
}
