pub mod heading;
pub mod image;
pub mod list_item;
pub mod table;
pub mod thematic_break;

pub use heading::Heading;
pub use image::Image;
pub use list_item::ListItem;
pub use table::Table;
pub use thematic_break::ThematicBreak;
