pub mod ask;
pub mod extract;
pub mod text;
