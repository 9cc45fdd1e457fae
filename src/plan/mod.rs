//! Collection plan construction.
//!
//! A plan is assembled purely from [`DistroInfo`]: a baseline of diagnostic
//! commands and filesystem paths common to every Linux host, extended with
//! the detected family's canonical authentication-log, web-server-log,
//! package-manager and scheduled-task locations. The builder never touches
//! the filesystem or network; every path is a fixed literal relative to the
//! staging root.

use crate::models::{CollectionPlan, CommandSpec, DistroInfo, PathSpec};

pub mod families;

/// Build the collection plan for a detected distribution.
///
/// Deterministic: equal inputs produce structurally equal plans. Every
/// family's plan is a strict extension of the baseline.
pub fn build_plan(info: &DistroInfo) -> CollectionPlan {
    let commands = baseline_commands();
    let mut paths = baseline_paths();
    paths.extend(families::family_paths(info.family).iter().cloned());

    CollectionPlan { commands, paths }
}

/// Diagnostic commands run on every host regardless of family.
///
/// Output paths are pre-assigned under category prefixes. Commands tied to a
/// particular init system or tool (`hostnamectl`, `systemctl`, `ss`, ...) are
/// optional: their absence is routine, not an error.
pub fn baseline_commands() -> Vec<CommandSpec> {
    vec![
        opt("hostnamectl", &["status"], "sistema/hostnamectl.txt"),
        cmd("uname", &["-a"], "sistema/uname.txt"),
        cmd("date", &["-u"], "sistema/fecha_utc.txt"),
        opt(
            "systemctl",
            &["list-units", "--type=service", "--state=running"],
            "servicios/servicios_activos.txt",
        ),
        opt("service", &["--status-all"], "servicios/service_status_all.txt"),
        cmd("ps", &["aux"], "procesos/ps_aux.txt"),
        opt("last", &["-a"], "sesiones/ultimos_inicios.txt"),
        opt("who", &["-a"], "sesiones/who_a.txt"),
        opt("ip", &["a"], "red/ip_a.txt"),
        opt("ss", &["-tulpn"], "red/conexiones_tcp_udp.txt"),
        opt("ss", &["-tpn"], "red/conexiones_internet.txt"),
        opt("netstat", &["-tulpn"], "red/netstat_tulpn.txt"),
        opt("crontab", &["-l"], "tareas/cron_usuario_actual.txt"),
        opt("atq", &[], "tareas/atq.txt"),
        opt("journalctl", &["-xe"], "logs/journalctl_xe.txt"),
    ]
}

/// Filesystem paths copied on every host regardless of family: account and
/// credential databases, name resolution, SSH configuration, shell history,
/// temp directories and binary login-session records.
pub fn baseline_paths() -> Vec<PathSpec> {
    vec![
        path("/etc/passwd", "sistema/etc/passwd"),
        path("/etc/shadow", "sistema/etc/shadow"),
        path("/etc/group", "sistema/etc/group"),
        path("/etc/hosts", "sistema/etc/hosts"),
        path("/etc/resolv.conf", "sistema/etc/resolv.conf"),
        path("/etc/ssh", "ssh_config"),
        path("/root/.bash_history", "bash_history/root.bash_history"),
        path("/home", "bash_history/home"),
        path("/tmp", "temporales/tmp"),
        path("/var/tmp", "temporales/var_tmp"),
        path("/var/log/wtmp", "sesiones/wtmp"),
        path("/var/log/lastlog", "sesiones/lastlog"),
    ]
}

fn cmd(name: &str, args: &[&str], output: &str) -> CommandSpec {
    CommandSpec {
        name: name.into(),
        args: args.iter().map(|a| a.to_string()).collect(),
        output: output.into(),
        optional: false,
    }
}

fn opt(name: &str, args: &[&str], output: &str) -> CommandSpec {
    CommandSpec {
        optional: true,
        ..cmd(name, args, output)
    }
}

pub(crate) fn path(source: &str, dest: &str) -> PathSpec {
    PathSpec {
        source: source.into(),
        dest: dest.into(),
    }
}
