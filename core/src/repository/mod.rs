pub mod file;
pub mod traits;

pub use file::FilePlayerSource;
pub use traits::PlayerSource;
