pub mod dimension;
pub mod font;
pub mod page;
pub mod parsers;

pub use dimension::{Dimension, Margins, PageSize};
pub use font::FontStyle;
pub use page::PageLayout;
pub use parsers::StyleParseError;
