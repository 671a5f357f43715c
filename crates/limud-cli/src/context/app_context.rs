use std::path::PathBuf;

use anyhow::Context;
use limud_config::LimudConfig;
use limud_db::service::LimudService;
use limud_flashcards::{SidePolicy, TenseExclusions};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::session_store::SessionStore;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: LimudService,
    pub config: LimudConfig,
    pub session: SessionStore,
    pub rng: StdRng,
}

impl AppContext {
    /// Open the database and session slot under the configured data directory.
    pub async fn init(config: LimudConfig) -> anyhow::Result<Self> {
        let data_dir = PathBuf::from(&config.storage.data_dir);
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let db_path = config.storage.database_path();
        let service = LimudService::new_local(&db_path.to_string_lossy())
            .await
            .context("failed to initialize limud-db service")?;

        let session = SessionStore::new(config.storage.session_path());
        Ok(Self::from_parts(service, config, session))
    }

    /// Assemble a context from already-opened parts.
    pub fn from_parts(service: LimudService, config: LimudConfig, session: SessionStore) -> Self {
        let rng = match config.flashcards.random_seed {
            Some(seed) => {
                tracing::debug!(seed, "using seeded random source");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Self {
            service,
            config,
            session,
            rng,
        }
    }

    /// Prompt and answer faces for vocabulary runs.
    pub const fn vocabulary_sides(&self) -> SidePolicy {
        SidePolicy::from_prompt_is_hebrew(self.config.flashcards.prompt_side_is_hebrew)
    }

    pub const fn tense_exclusions(&self) -> TenseExclusions {
        TenseExclusions {
            waw_consecutives: self.config.conjugation.exclude_waw_consecutives,
            jussive_and_cohortatives: self.config.conjugation.exclude_jussive_and_cohortatives,
        }
    }
}
