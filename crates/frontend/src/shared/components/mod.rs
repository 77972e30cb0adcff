pub mod date_input;
pub mod suggest_input;

pub use date_input::DateInput;
pub use suggest_input::SuggestInput;
