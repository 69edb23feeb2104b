mod query_assembler;
mod result_summarizer;

pub use query_assembler::QueryAssembler;
pub use result_summarizer::{summarize, NvdResponse, SampleBudget};
