//! Custom widget components

mod card_view;
mod header;
mod search_input;
mod status_bar;
mod term_list;

pub use card_view::{card_lines, CardView};
pub use header::MainHeader;
pub use search_input::SearchInput;
pub use status_bar::StatusBar;
pub use term_list::TermList;
