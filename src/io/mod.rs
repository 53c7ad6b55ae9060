// Delimited input reading and document writing

pub mod reader;
pub mod writer;
