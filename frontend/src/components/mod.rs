pub mod countdown;
pub mod footer;
pub mod nav;
pub mod notify_form;
pub mod theme_toggle;
