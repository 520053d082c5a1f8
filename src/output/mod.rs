pub mod css;
pub mod html;

pub use html::HtmlDocument;
