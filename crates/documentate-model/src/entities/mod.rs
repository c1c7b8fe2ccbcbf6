pub mod class;
pub mod function;
pub mod module;

pub use class::{Class, Variable};
pub use function::{Argument, Function, ReturnType};
pub use module::{module_name_for, Module};
