use cppython_derive::cppython_error;

#[cppython_error]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(std::io::Error),
}

fn main() {}
