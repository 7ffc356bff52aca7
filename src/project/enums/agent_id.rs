/// Client that issued a project generation request.
///
/// Each variant has an `id()` used in the emitted documents and a `name()`
/// matched against the `User-Agent` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentId {
    Curl,
    Httpie,
    JbossForge,
    SpringBootCli,
    Sts,
    IntellijIdea,
    Netbeans,
    VsCode,
    JenkinsX,
    NbSpringBoot,
    Browser,
}
