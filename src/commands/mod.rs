pub mod check;
pub mod ics;
pub mod next;
pub mod reminders;
pub mod submit;
pub mod upcoming;
