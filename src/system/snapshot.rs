/// Latest CPU and memory reading. Replaced wholesale on every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Snapshot {
    pub cpu_percent: f64,
    pub memory_total: u64,
    pub memory_used: u64,
    pub memory_available: u64,
    pub memory_used_percent: f64,
    pub uptime_secs: u64,
}

/// Memory reading as produced by the sampler: `used` excludes reclaimable
/// cache and buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemoryReading {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub used_percent: f64,
}

impl Snapshot {
    pub fn from_readings(cpu_percent: f64, memory: MemoryReading, uptime_secs: u64) -> Self {
        Snapshot {
            cpu_percent,
            memory_total: memory.total,
            memory_used: memory.used,
            memory_available: memory.available,
            memory_used_percent: memory.used_percent,
            uptime_secs,
        }
    }
}
