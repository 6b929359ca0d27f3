use once_cell::sync::Lazy;
use sysinfo::{CpuExt, System, SystemExt};

#[derive(Debug, Clone)]
pub struct PlatformInfo {
    pub host: String,
    pub os: String,
    pub arch: String,
    pub cpu_model: String,
    pub cpus: usize,
    /// Total memory in bytes
    pub memory: u64,
}

impl PlatformInfo {
    /// Markdown bullet list, used as the table report header.
    pub fn to_markdown(&self) -> String {
        format!(
            "* host: {}\n* os: {} ({})\n* cpu: {} x {}\n* memory: {:.1} GiB\n",
            self.host,
            self.os,
            self.arch,
            self.cpus,
            self.cpu_model,
            self.memory as f64 / (1u64 << 30) as f64
        )
    }
}

pub static PLATFORM_INFO: Lazy<PlatformInfo> = Lazy::new(|| {
    let mut sys = System::new();
    sys.refresh_cpu();
    sys.refresh_memory();
    const UNKNOWN: &str = "<unknown>";
    PlatformInfo {
        host: sys.host_name().unwrap_or(UNKNOWN.to_string()),
        os: sys.long_os_version().unwrap_or(UNKNOWN.to_string()),
        arch: std::env::consts::ARCH.to_string(),
        cpu_model: sys.global_cpu_info().brand().to_owned(),
        cpus: sys.cpus().len(),
        memory: sys.total_memory(),
    }
});
