//! A2A data model: agent cards, messages, tasks, and stream events.

pub mod card;
pub mod kind;
pub mod message;
pub mod push;
pub mod stream;
pub mod task;

pub use card::*;
pub use kind::*;
pub use message::*;
pub use push::*;
pub use stream::*;
pub use task::*;
