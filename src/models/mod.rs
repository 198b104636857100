mod category;
mod input;
mod item;

pub use category::Category;
pub use input::ItemInput;
pub use item::{Item, ItemKey};
