mod error;
mod file;
mod line;

pub use error::StoreError;
pub use file::FileStore;
