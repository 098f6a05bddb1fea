use crate::config::DisplayConfig;
use crate::format::friendly_os_name;

/// Host facts that do not change while the dashboard is running.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostIdentity {
    pub username: Option<String>,
    pub hostname: Option<String>,
    /// OS family as reported by the platform (`linux`, `macos`, `darwin`, ...).
    pub os: Option<String>,
    /// Distribution and version, e.g. `ubuntu 24.04`.
    pub platform: Option<String>,
}

/// Optional panel rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFields {
    pub username: bool,
    pub hostname: bool,
    pub os: bool,
    pub uptime: bool,
}

impl Default for DisplayFields {
    fn default() -> Self {
        DisplayFields::all()
    }
}

impl DisplayFields {
    pub fn all() -> Self {
        DisplayFields {
            username: true,
            hostname: true,
            os: true,
            uptime: true,
        }
    }

    pub fn none() -> Self {
        DisplayFields {
            username: false,
            hostname: false,
            os: false,
            uptime: false,
        }
    }

    pub fn from_config(display: &DisplayConfig) -> Self {
        DisplayFields {
            username: display.username,
            hostname: display.hostname,
            os: display.os,
            uptime: display.uptime,
        }
    }

    pub fn any(&self) -> bool {
        self.username || self.hostname || self.os || self.uptime
    }
}

/// Display-ready host text, resolved once at session start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInfo {
    pub fields: DisplayFields,
    pub username: String,
    pub hostname: String,
    pub os: String,
}

impl HostInfo {
    pub fn resolve(fields: DisplayFields, identity: HostIdentity) -> Self {
        let os = match (identity.os, identity.platform) {
            (Some(os), Some(platform)) => format!("{} {}", friendly_os_name(&os), platform),
            (Some(os), None) => friendly_os_name(&os),
            (None, Some(platform)) => platform,
            (None, None) => String::new(),
        };

        HostInfo {
            fields,
            username: identity.username.unwrap_or_default(),
            hostname: identity.hostname.unwrap_or_default(),
            os,
        }
    }
}
