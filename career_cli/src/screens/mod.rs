pub mod form;
pub mod result;

pub use form::{FormScreen, FormState};
pub use result::{ResultScreen, ResultState};
