//! Marketing copy generators. Read-only over the catalog; they emit text
//! artifacts (social captions, slideshow prompts) and never touch the view
//! engine. Output is deterministic per product so regenerating is a no-op
//! diff.

pub mod captions;
pub mod prompts;
