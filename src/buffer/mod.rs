pub mod cursor;
pub mod write;

pub use cursor::ReadCursor;
pub use write::WriteBuffer;
