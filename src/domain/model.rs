use serde::{Deserialize, Serialize};

/// A move a Pokémon can learn, as returned inside a detail payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MovePayload")]
pub struct Move {
    pub name: String,
    pub level_learned_at: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct VersionGroupDetail {
    #[serde(default)]
    level_learned_at: Option<u32>,
}

// Flat `{name, level_learned_at}` entries, or PokeAPI's nested
// `{move: {name, url}, version_group_details: [...]}` entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum MovePayload {
    Flat {
        name: String,
        #[serde(default)]
        level_learned_at: Option<u32>,
    },
    Nested {
        #[serde(rename = "move")]
        resource: NamedApiResource,
        #[serde(default)]
        version_group_details: Vec<VersionGroupDetail>,
    },
}

impl From<MovePayload> for Move {
    fn from(payload: MovePayload) -> Self {
        match payload {
            MovePayload::Flat {
                name,
                level_learned_at,
            } => Self {
                name,
                level_learned_at,
            },
            MovePayload::Nested {
                resource,
                version_group_details,
            } => Self {
                name: resource.name,
                level_learned_at: version_group_details
                    .first()
                    .and_then(|detail| detail.level_learned_at),
            },
        }
    }
}

/// The subset of `GET /pokemon/{id}` this crate reads.
#[derive(Debug, Clone, Deserialize)]
pub struct PokeapiResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    pub moves: Vec<Move>,
}
