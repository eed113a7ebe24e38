//! Compile options
//!
//! Knobs that shape the wire output without changing what is expressed. Today only the paged
//! schema has any: the alignment stamped on every block and the size given to text blocks.

use crate::schema::paged::{Alignment, TextSize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    pub paged: PagedOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagedOptions {
    pub alignment: Alignment,
    pub text_size: TextSize,
}

impl CompileOptions {
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.paged.alignment = alignment;
        self
    }

    pub fn with_text_size(mut self, text_size: TextSize) -> Self {
        self.paged.text_size = text_size;
        self
    }
}
