pub mod message;
pub mod payload;
pub mod templating;
pub mod validation;
