
pub mod message;
pub mod traits;
pub mod validated;
pub mod validator;
pub mod value;
