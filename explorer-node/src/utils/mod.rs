pub mod html;
pub mod response;

pub use html::{render_page, render_redirect, Page};
pub use response::json_response;
