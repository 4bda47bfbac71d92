/// Fleet-wide host counts, recomputed fresh on every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostSummary {
    pub online_count: u32,
    pub offline_count: u32,
    pub mia_count: u32,
    /// Hosts enrolled within the last day.
    pub new_count: u32,
}
