pub mod faq;
pub mod horizontal_scroll;
pub mod magnetic;
pub mod navigation;
pub mod scroll_progress;
pub mod section_header;
