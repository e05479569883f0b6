mod help;
mod section;
mod status_bar;
mod todo_list;

pub use help::HelpWidget;
pub use section::SectionWidget;
pub use status_bar::StatusBarWidget;
pub use todo_list::TodoListWidget;
