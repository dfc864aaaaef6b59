pub mod mapping;
pub mod pipeline;
pub mod translit;
pub mod unicode;
