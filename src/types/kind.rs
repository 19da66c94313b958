//! Single-value `kind` discriminators carried by each payload object.
//!
//! Each marker accepts only its own literal, so untagged enums over these
//! payloads pick the variant whose `kind` matches.

use serde::{Deserialize, Serialize};

macro_rules! kind_marker {
    ($(#[$doc:meta])* $name:ident, $value:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            #[default]
            #[serde(rename = $value)]
            Kind,
        }

        impl $name {
            pub const VALUE: &'static str = $value;
        }
    };
}

kind_marker!(
    /// `"kind": "message"`
    MessageKind,
    "message"
);
kind_marker!(
    /// `"kind": "task"`
    TaskKind,
    "task"
);
kind_marker!(
    /// `"kind": "status-update"`
    StatusUpdateKind,
    "status-update"
);
kind_marker!(
    /// `"kind": "artifact-update"`
    ArtifactUpdateKind,
    "artifact-update"
);
