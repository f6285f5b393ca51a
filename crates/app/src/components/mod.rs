pub mod book_cover;

pub use book_cover::BookCover;
