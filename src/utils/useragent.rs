use rand::seq::SliceRandom;

use crate::settings::TestConfig;

/// Used when the configured list is empty.
pub const DEFAULT_USER_AGENT: &str = "MiSub-Proxy-Test/1.0";

/// Pick a user agent uniformly at random from the configured list.
pub fn get_random_user_agent() -> String {
    pick_user_agent(&TestConfig::current().user_agents)
}

fn pick_user_agent(agents: &[String]) -> String {
    agents
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
}
