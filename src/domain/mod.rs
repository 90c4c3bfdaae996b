mod wallet;

pub use wallet::*;
