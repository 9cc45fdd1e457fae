use crate::models::Family;

/// Classify a distribution into its canonical family.
///
/// Deterministic, total and side-effect-free over `(id, id_like)`; assumes
/// the caller already lowercased and tokenized both inputs. Direct `ID`
/// matches win; otherwise the `ID_LIKE` hierarchy decides in a fixed priority
/// order; everything else is [`Family::Unknown`].
pub fn classify(id: &str, id_like: &[String]) -> Family {
    match id {
        "debian" | "ubuntu" | "linuxmint" | "pop" | "elementary" | "kali" | "raspbian"
        | "raspberrypi" => return Family::Debian,
        "fedora" | "centos" | "centos-stream" | "almalinux" | "rocky" | "rhel" => {
            return Family::RedHat
        }
        "opensuse" | "opensuse-leap" | "opensuse-tumbleweed" | "sles" => return Family::Suse,
        "arch" | "manjaro" | "endeavouros" | "arcolinux" => return Family::Arch,
        "gentoo" | "sabayon" | "calculate" => return Family::Gentoo,
        "slackware" | "slackel" | "salix" => return Family::Slackware,
        "tails" | "steamos" | "alpine" => return Family::Specialized,
        _ => {}
    }

    let has = |token: &str| id_like.iter().any(|t| t == token);

    if has("debian") {
        return Family::Debian;
    }
    if has("rhel") || has("fedora") || has("centos") {
        return Family::RedHat;
    }
    if has("suse") || has("opensuse") {
        return Family::Suse;
    }
    if has("arch") {
        return Family::Arch;
    }
    if has("gentoo") {
        return Family::Gentoo;
    }
    if has("slackware") {
        return Family::Slackware;
    }

    Family::Unknown
}
