mod account;

pub use account::{AccountCommands, KindArg};
