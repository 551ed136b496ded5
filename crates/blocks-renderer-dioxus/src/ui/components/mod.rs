pub mod block;
pub mod block_quote;
pub mod blocks_renderer;
pub mod code_block;
pub mod heading;
pub mod image;
pub mod link;
pub mod list;
pub mod modifiers;
pub mod paragraph;
pub mod text;

pub use block::{Block, render_block};
pub use block_quote::{BlockQuote, QuoteProps};
pub use blocks_renderer::{BlocksRenderer, BlocksRendererProps, render_document};
pub use code_block::{CodeBlock, CodeProps};
pub use heading::{Heading, HeadingProps};
pub use image::{ImageBlock, ImageProps};
pub use link::{InlineLink, LinkProps};
pub use list::{List, ListItem, ListItemProps, ListProps};
pub use modifiers::{Bold, InlineCode, Italic, ModifierProps, Strikethrough, Underline};
pub use paragraph::{Paragraph, ParagraphProps};
pub use text::{Text, render_text};
