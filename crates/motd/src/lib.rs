mod html;
mod models;
mod palette;
mod parser;
mod sample;


pub use html::render_line_html;
pub use models::{Color, Segment, Style};
pub use parser::{parse_line, strip_codes};
pub use sample::{gradient, sample_motd};
