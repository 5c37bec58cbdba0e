mod input;

pub use input::load_document;
