mod card_grid;
mod detail;
mod quiz;
mod search_bar;
mod status_bar;
mod switch_bar;

pub use card_grid::CardGridWidget;
pub use detail::DetailWidget;
pub use quiz::QuizWidget;
pub use search_bar::SearchBarWidget;
pub use status_bar::StatusBarWidget;
pub use switch_bar::SwitchBarWidget;
