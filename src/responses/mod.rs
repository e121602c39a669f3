pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::{error_to_response, ResultResp};

pub use html::{html_fragment, html_response};
pub use redirect::see_other;
