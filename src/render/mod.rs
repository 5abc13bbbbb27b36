//! Rendering pipeline: strips and blocks, box primitives, joins, the tree
//! dispatcher and the terminal driver.

pub mod block;
pub mod boxes;
pub mod compositor;
pub mod dispatch;
pub mod driver;
pub mod strip;

pub use block::{Block, CellUpdate};
pub use dispatch::{render_frame, render_node, RenderContext};
pub use driver::Driver;
pub use strip::{CellStyle, Strip, StyledCell};
