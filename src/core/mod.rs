pub mod constants;
pub mod cursor;
pub mod lifecycle;
pub mod particles;
pub mod pointer;
pub mod scroll;

pub use cursor::*;
pub use lifecycle::*;
pub use particles::*;
pub use pointer::*;
pub use scroll::*;

/// Every tunable the page uses, grouped per subsystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct Settings {
    pub cursor: CursorParams,
    pub field: FieldParams,
    pub ui: UiParams,
}
