//! Agent card resolution and public/extended card selection.

pub mod resolver;
pub mod selection;

pub use resolver::{
    AgentCardResolver, AgentCardSource, EXTENDED_AGENT_CARD_PATH, PUBLIC_AGENT_CARD_PATH,
};
pub use selection::{select_agent_card, CardSelection, CardSource, ExtendedCardRequest};
