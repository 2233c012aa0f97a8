mod editor;

pub use editor::{EditorSession, Template};
