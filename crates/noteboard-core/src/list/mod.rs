pub mod models;
pub mod ops;
pub mod paste;

pub use models::{generate_id, Bookmark, Todo, WithId};
pub use ops::{find, find_index, find_mut, insert_after, move_by, move_to};
pub use paste::{parse_clipboard, paste};
