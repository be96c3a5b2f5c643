pub mod content_reader;
pub mod content_writer;

pub use crate::io::content_reader::ContentReader;
pub use crate::io::content_writer::ContentWriter;
