mod event_list;
mod month_view;

pub use event_list::{EventList, EventListAction};
pub use month_view::{MonthView, MonthViewAction};
