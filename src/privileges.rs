use log::{info, warn};

/// Check if the process is running as root.
pub fn is_root() -> bool {
    unsafe { libc::geteuid() == 0 }
}

/// Log the privilege level the run starts with.
///
/// Collection is best-effort, so an unprivileged run proceeds anyway; shadow
/// files, root history and similar targets will simply be skipped.
pub fn report_privileges() {
    if is_root() {
        info!("Running as root");
    } else {
        warn!("Not running as root - some artifacts may be inaccessible");
    }
}
