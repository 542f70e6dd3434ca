pub mod validator;

pub use self::validator::ValidatorEngine;
