//! Namespace-aware XML helpers over `roxmltree`.

mod serialize;
mod utils;

pub use serialize::serialize_subtree;
pub use utils::{children_ns, descendants_ns, first_text_ns, get_text, texts_ns};
