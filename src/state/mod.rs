mod editor_state;
pub mod context;

pub use context::{EditorContext, FileRequest};
pub use editor_state::EditorState;
