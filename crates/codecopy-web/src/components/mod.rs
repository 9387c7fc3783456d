mod code_block;

pub use code_block::CodeBlock;
