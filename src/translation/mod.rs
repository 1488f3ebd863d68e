// Translation between the promptlens HTTP surface and the Gemini wire format

mod request;
mod response;

pub use request::{build_instruction, translate_request};
pub use response::{parse_analysis, strip_code_fences};
