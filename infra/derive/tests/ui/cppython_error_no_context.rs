use cppython_derive::cppython_error;

#[cppython_error]
pub enum DemoError {
    #[error("I/O error: {source}")]
    Io { source: std::io::Error },
}

fn main() {}
