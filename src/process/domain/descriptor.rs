//! Process descriptors parsed from `pm2 jlist`.

use serde::Deserialize;

/// Summary of one supervised process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessDescriptor {
    /// Process name.
    pub name: String,
    /// PM2 numeric identifier.
    pub id: u64,
    /// PM2 status string such as `online` or `stopped`.
    pub status: String,
    /// Resident memory in bytes.
    pub memory_bytes: i64,
}

impl ProcessDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: u64,
        status: impl Into<String>,
        memory_bytes: i64,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            status: status.into(),
            memory_bytes,
        }
    }
}

#[derive(Debug, Deserialize)]
struct JlistEntry {
    name: String,
    pm_id: u64,
    #[serde(default)]
    pm2_env: JlistEnvironment,
    #[serde(default)]
    monit: JlistMonitor,
}

#[derive(Debug, Default, Deserialize)]
struct JlistEnvironment {
    #[serde(default)]
    status: String,
}

#[derive(Debug, Default, Deserialize)]
struct JlistMonitor {
    #[serde(default)]
    memory: i64,
}

impl From<JlistEntry> for ProcessDescriptor {
    fn from(entry: JlistEntry) -> Self {
        Self {
            name: entry.name,
            id: entry.pm_id,
            status: entry.pm2_env.status,
            memory_bytes: entry.monit.memory,
        }
    }
}

/// Parses the JSON array printed by `pm2 jlist`, preserving its order.
///
/// # Errors
///
/// Returns [`serde_json::Error`] when the output is not a JSON array of
/// process entries.
pub fn parse_process_list(raw: &str) -> Result<Vec<ProcessDescriptor>, serde_json::Error> {
    let entries: Vec<JlistEntry> = serde_json::from_str(raw)?;
    Ok(entries.into_iter().map(ProcessDescriptor::from).collect())
}
