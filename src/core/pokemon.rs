use crate::domain::model::{Move, PokeapiResponse};
use crate::domain::ports::{Announcer, ConfigProvider, HttpAdapter, TracingAnnouncer};
use crate::utils::error::Result;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_COLLECTION: &str = "pokemon";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://pokemon.com";

/// Where detail payloads and images are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub api_base_url: String,
    pub collection: String,
    pub image_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}

impl Endpoints {
    pub fn from_provider<C: ConfigProvider>(config: &C) -> Self {
        Self {
            api_base_url: config.api_base_url().trim_end_matches('/').to_string(),
            collection: config.collection().to_string(),
            image_base_url: config.image_base_url().trim_end_matches('/').to_string(),
        }
    }
}

/// A Pokémon bound to the transport it was constructed with.
///
/// `id`, the transport, the announcer and the endpoints are fixed for the
/// lifetime of the value; only `name` can change.
pub struct Pokemon<H: HttpAdapter, A: Announcer = TracingAnnouncer> {
    id: i64,
    name: String,
    http: H,
    announcer: A,
    endpoints: Endpoints,
}

impl<H: HttpAdapter> Pokemon<H> {
    pub fn new(id: i64, name: impl Into<String>, http: H) -> Self {
        Self::with_parts(id, name, http, TracingAnnouncer, Endpoints::default())
    }
}

impl<H: HttpAdapter, A: Announcer> Pokemon<H, A> {
    pub fn with_parts(
        id: i64,
        name: impl Into<String>,
        http: H,
        announcer: A,
        endpoints: Endpoints,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            http,
            announcer,
            endpoints,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn image_url(&self) -> String {
        format!("{}/{}.jpg", self.endpoints.image_base_url, self.id)
    }

    pub fn moves_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.endpoints.api_base_url, self.endpoints.collection, self.id
        )
    }

    pub fn scream(&self) -> String {
        let line = format!("{}!!!", self.name.to_uppercase());
        self.announcer.announce(&line);
        line
    }

    fn speak(&self) {
        self.announcer.announce(&format!("{}, {}", self.name, self.name));
    }

    /// Fetches the detail payload through the bound transport and returns its moves in order.
    ///
    /// Transport and decode failures are returned exactly as the adapter produced them.
    pub async fn get_moves(&self) -> Result<Vec<Move>> {
        self.speak();

        let url = self.moves_url();
        tracing::debug!("Fetching moves for #{} from {}", self.id, url);
        let data: PokeapiResponse = self.http.get(&url).await?;
        tracing::debug!("#{} knows {} moves", self.id, data.moves.len());

        Ok(data.moves)
    }
}

impl<H: HttpAdapter, A: Announcer> std::fmt::Debug for Pokemon<H, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pokemon")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
