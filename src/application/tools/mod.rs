/// Tools the language model may invoke
mod nvd_search_tool;

pub use nvd_search_tool::{NvdSearchTool, NVD_SEARCH_TOOL_NAME};
