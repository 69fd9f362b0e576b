//! Shared application state.

use ideaproof_core::IdeaproofConfig;
use ideaproof_llm::LLMConfig;
use ideaproof_runtime::Orchestrator;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: IdeaproofConfig,
    pub llm_config: LLMConfig,
    pub orchestrator: Orchestrator,
}

impl AppState {
    pub fn new(config: IdeaproofConfig, llm_config: LLMConfig) -> Self {
        let orchestrator = Orchestrator::from_config(&config, &llm_config);
        Self::with_orchestrator(config, llm_config, orchestrator)
    }

    pub fn with_orchestrator(
        config: IdeaproofConfig,
        llm_config: LLMConfig,
        orchestrator: Orchestrator,
    ) -> Self {
        Self {
            config,
            llm_config,
            orchestrator,
        }
    }
}
