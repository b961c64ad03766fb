mod gateway;
mod types;

pub use gateway::{NotesGateway, build_prompt};
pub use types::*;
