use kurbo::Point;

use crate::command::Command;
use crate::config::EditorConfig;
use crate::renderer::RenderContext;

/// Tool trait defines the interface for all drawing tools.
///
/// Positions are in drawing space. A tool never touches the drawing itself;
/// finished work comes back as a [`Command`] for the editor to execute.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Called when the tool is selected (activated)
    fn activate(&mut self) {
        // default: do nothing
    }

    /// Called when the tool is deselected. Any entity under construction is
    /// discarded, never partially committed.
    fn deactivate(&mut self);

    /// Handle pointer press on the canvas
    fn on_pointer_down(&mut self, pos: Point) -> Option<Command>;

    /// Handle pointer movement, with or without a button held
    fn on_pointer_move(&mut self, pos: Point) -> Option<Command>;

    /// Handle pointer release on the canvas
    fn on_pointer_up(&mut self, _pos: Point) -> Option<Command> {
        None
    }

    /// Explicit end of an open-ended entity (Escape)
    fn end_entity(&mut self) -> Option<Command> {
        self.deactivate();
        None
    }

    /// Instruction for the next step of the gesture
    fn prompt(&self) -> &'static str;

    /// True while a gesture is half done
    fn is_busy(&self) -> bool;

    /// Draws construction feedback for the gesture in progress
    fn draw_feedback(&self, ctx: &mut RenderContext<'_>);

    fn input_bar(&self) -> Option<&InputBar> {
        None
    }

    fn input_bar_mut(&mut self) -> Option<&mut InputBar> {
        None
    }

    /// Completes a step from typed values instead of a click
    fn apply_typed(&mut self, _input: &TypedInput) -> Option<Command> {
        None
    }
}

pub mod input_bar;
pub use input_bar::{InputBar, InputField, InputLayout, TypedInput};

mod cline_builder;
mod ellipse_builder;
mod line_builder;
mod rect_builder;
mod scribble_builder;
mod selection_tool;

pub use cline_builder::CLineBuilder;
pub use ellipse_builder::EllipseBuilder;
pub use line_builder::LineBuilder;
pub use rect_builder::RectBuilder;
pub use scribble_builder::ScribbleBuilder;
pub use selection_tool::SelectionTool;

/// Names accepted by [`new_tool`], in toolbar order
pub const TOOL_NAMES: [&str; 6] = [
    "Scribble",
    "Line",
    "Rectangle",
    "Ellipse",
    "ConnectedLine",
    "Selection",
];

/// Enum representing all available tool types
#[derive(Debug, Clone)]
pub enum ToolType {
    Scribble(ScribbleBuilder),
    Line(LineBuilder),
    Rectangle(RectBuilder),
    Ellipse(EllipseBuilder),
    ConnectedLine(CLineBuilder),
    Selection(SelectionTool),
}

macro_rules! dispatch {
    ($self:ident, $tool:ident => $body:expr) => {
        match $self {
            ToolType::Scribble($tool) => $body,
            ToolType::Line($tool) => $body,
            ToolType::Rectangle($tool) => $body,
            ToolType::Ellipse($tool) => $body,
            ToolType::ConnectedLine($tool) => $body,
            ToolType::Selection($tool) => $body,
        }
    };
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        dispatch!(self, tool => tool.name())
    }

    fn activate(&mut self) {
        dispatch!(self, tool => tool.activate())
    }

    fn deactivate(&mut self) {
        dispatch!(self, tool => tool.deactivate())
    }

    fn on_pointer_down(&mut self, pos: Point) -> Option<Command> {
        dispatch!(self, tool => tool.on_pointer_down(pos))
    }

    fn on_pointer_move(&mut self, pos: Point) -> Option<Command> {
        dispatch!(self, tool => tool.on_pointer_move(pos))
    }

    fn on_pointer_up(&mut self, pos: Point) -> Option<Command> {
        dispatch!(self, tool => tool.on_pointer_up(pos))
    }

    fn end_entity(&mut self) -> Option<Command> {
        dispatch!(self, tool => tool.end_entity())
    }

    fn prompt(&self) -> &'static str {
        dispatch!(self, tool => tool.prompt())
    }

    fn is_busy(&self) -> bool {
        dispatch!(self, tool => tool.is_busy())
    }

    fn draw_feedback(&self, ctx: &mut RenderContext<'_>) {
        dispatch!(self, tool => tool.draw_feedback(ctx))
    }

    fn input_bar(&self) -> Option<&InputBar> {
        dispatch!(self, tool => tool.input_bar())
    }

    fn input_bar_mut(&mut self) -> Option<&mut InputBar> {
        dispatch!(self, tool => tool.input_bar_mut())
    }

    fn apply_typed(&mut self, input: &TypedInput) -> Option<Command> {
        dispatch!(self, tool => tool.apply_typed(input))
    }
}

impl ToolType {
    /// Resolves the input bar and applies the result (Enter)
    pub fn commit_input(&mut self) -> Option<Command> {
        let input = self.input_bar_mut()?.commit()?;
        log::debug!("{} applying typed input {input:?}", self.name());
        self.apply_typed(&input)
    }
}

/// Factory function to create a new tool of the specified type
pub fn new_tool(name: &str, config: &EditorConfig) -> Option<ToolType> {
    let tool = match name {
        "Scribble" => ToolType::Scribble(ScribbleBuilder::new()),
        "Line" => ToolType::Line(LineBuilder::new()),
        "Rectangle" => ToolType::Rectangle(RectBuilder::new()),
        "Ellipse" => ToolType::Ellipse(EllipseBuilder::new(config.ellipse_segments)),
        "ConnectedLine" => ToolType::ConnectedLine(CLineBuilder::new()),
        "Selection" => ToolType::Selection(SelectionTool::new(config.pick_tolerance)),
        _ => {
            log::warn!("Unknown tool requested: {name}");
            return None;
        }
    };
    Some(tool)
}
