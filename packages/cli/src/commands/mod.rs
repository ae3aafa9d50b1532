pub mod apply;
pub mod check;
pub mod generate;
pub mod init;

pub use apply::{apply, ApplyArgs};
pub use check::{check, CheckArgs};
pub use generate::{generate, GenerateArgs};
pub use init::{init, InitArgs};
