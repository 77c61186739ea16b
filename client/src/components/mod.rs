//! Reusable gallery building blocks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components take precomputed view models from `state::gallery` as props and
//! emit markup only; none of them read context.

pub mod badge;
pub mod external_link;
pub mod group_section;
pub mod item_card;
