pub mod classify;
pub mod evaluate;
pub mod validate;
