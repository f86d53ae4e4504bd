use crate::tools::{Tool, ToolType};

/// Which tool, if any, receives canvas input
#[derive(Debug, Default, Clone)]
pub enum EditorState {
    #[default]
    Idle,
    UsingTool {
        active_tool: ToolType,
    },
}

impl EditorState {
    /// Switches tools. Whatever the old tool had under construction is dropped.
    pub fn set_active_tool(&mut self, mut tool: ToolType) {
        if let Self::UsingTool { active_tool } = self {
            if active_tool.is_busy() {
                log::debug!("Discarding unfinished {} entity", active_tool.name());
            }
            active_tool.deactivate();
        }
        tool.activate();
        *self = Self::UsingTool { active_tool: tool };
    }

    pub fn active_tool(&self) -> Option<&ToolType> {
        match self {
            Self::UsingTool { active_tool } => Some(active_tool),
            Self::Idle => None,
        }
    }

    pub fn active_tool_mut(&mut self) -> Option<&mut ToolType> {
        match self {
            Self::UsingTool { active_tool } => Some(active_tool),
            Self::Idle => None,
        }
    }
}
