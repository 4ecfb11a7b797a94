// Macros first: later modules rely on textual macro scope.
#[macro_use]
pub mod safety;
#[macro_use]
pub mod console;
