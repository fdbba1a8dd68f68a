use super::{ProcessCollector, ProcessRecord};
use std::fs;
use std::path::{Path, PathBuf};

pub struct LinuxProcessCollector;

impl LinuxProcessCollector {
    pub fn new() -> Self {
        Self
    }

    fn parse_process(&self, pid: u32) -> Option<ProcessRecord> {
        let proc_dir = PathBuf::from(format!("/proc/{}", pid));

        let stat = fs::read_to_string(proc_dir.join("stat")).ok()?;
        // comm may contain spaces or parentheses, so split around the last ')'
        let open = stat.find('(')?;
        let close = stat.rfind(')')?;
        let name = stat.get(open + 1..close)?.to_string();
        let rest: Vec<&str> = stat.get(close + 1..)?.split_whitespace().collect();
        if rest.len() < 21 {
            return None;
        }

        let state = rest[0].chars().next().unwrap_or('?');
        if state == 'Z' {
            // zombie entries have nothing useful left to report
            return None;
        }

        // vsize is field 23 of /proc/<pid>/stat, already in bytes
        let vm_bytes: u64 = rest[20].parse().ok()?;
        let user = Self::read_owner(&proc_dir);

        Some(ProcessRecord {
            pid,
            name,
            user,
            vm_bytes,
        })
    }

    fn read_owner(proc_dir: &Path) -> Option<String> {
        let status = fs::read_to_string(proc_dir.join("status")).ok()?;
        let uid_line = status.lines().find(|line| line.starts_with("Uid:"))?;
        let uid: u32 = uid_line.split_whitespace().nth(1)?.parse().ok()?;
        users::get_user_by_uid(uid).map(|user| user.name().to_string_lossy().into_owned())
    }
}

impl Default for LinuxProcessCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessCollector for LinuxProcessCollector {
    fn list_processes(&self) -> Vec<ProcessRecord> {
        let mut processes = Vec::new();
        if let Ok(entries) = fs::read_dir("/proc") {
            for entry in entries.flatten() {
                if let Some(name) = entry.file_name().to_str() {
                    if let Ok(pid) = name.parse::<u32>() {
                        if let Some(record) = self.parse_process(pid) {
                            processes.push(record);
                        }
                    }
                }
            }
        }
        processes
    }

    fn get_process(&self, pid: u32) -> Option<ProcessRecord> {
        self.parse_process(pid)
    }
}
