pub(crate) mod line;
pub(crate) mod rect;

pub use line::LineCmd;
pub use rect::RectCmd;
