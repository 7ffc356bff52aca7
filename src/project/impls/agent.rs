use std::sync::LazyLock;
use regex::Regex;
use crate::project::enums::agent_id::AgentId;
use crate::project::structs::agent::Agent;

static TOOL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^/]*)/([^ ]*).*$").expect("tool regex"));
static STS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^STS (.*)$").expect("sts regex"));
static NETBEANS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^nb-springboot-plugin/(.*)$").expect("netbeans regex"));

impl Agent {
    pub fn new(id: AgentId, version: Option<String>) -> Agent
    {
        Agent { id, version }
    }

    /// Detects the client tool from a `User-Agent` header value.
    ///
    /// `name/version ...` is matched against the known agent names first,
    /// then the STS and NetBeans plugin formats, then the bare IntelliJ IDEA
    /// name. Anything carrying `Mozilla/5.0` is reported as a browser.
    pub fn from_user_agent(user_agent: &str) -> Option<Agent>
    {
        if let Some(captures) = TOOL_REGEX.captures(user_agent) {
            if let Some(id) = AgentId::from_name(&captures[1]) {
                return Some(Agent::new(id, Some(captures[2].to_string())));
            }
        }
        if let Some(captures) = STS_REGEX.captures(user_agent) {
            return Some(Agent::new(AgentId::Sts, Some(captures[1].to_string())));
        }
        if let Some(captures) = NETBEANS_REGEX.captures(user_agent) {
            return Some(Agent::new(AgentId::NbSpringBoot, Some(captures[1].to_string())));
        }
        if user_agent == AgentId::IntellijIdea.name() {
            return Some(Agent::new(AgentId::IntellijIdea, None));
        }
        if user_agent.contains("Mozilla/5.0") {
            return Some(Agent::new(AgentId::Browser, None));
        }
        None
    }
}
