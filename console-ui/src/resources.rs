//! Static navigation metadata, one table per deployment mode.

use console_types::RUN_MODE_CLUSTER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: &'static str,
    pub name: &'static str,
    pub route_path: &'static str,
    pub icon: &'static str,
    pub keep_alive: bool,
}

pub const STANDALONE_MENU: &[MenuEntry] = &[
    MenuEntry {
        title: "Dashboard",
        name: "dashboard",
        route_path: "/dashboard",
        icon: "📊",
        keep_alive: false,
    },
    MenuEntry {
        title: "Jobs",
        name: "job",
        route_path: "/job",
        icon: "🗂",
        keep_alive: true,
    },
    MenuEntry {
        title: "Traces",
        name: "trace",
        route_path: "/trace",
        icon: "📅",
        keep_alive: true,
    },
    MenuEntry {
        title: "Users",
        name: "user",
        route_path: "/user",
        icon: "👤",
        keep_alive: true,
    },
    MenuEntry {
        title: "Alarms",
        name: "alarm",
        route_path: "/alarm",
        icon: "🔔",
        keep_alive: true,
    },
    MenuEntry {
        title: "About",
        name: "about",
        route_path: "/about",
        icon: "ℹ️",
        keep_alive: true,
    },
];

pub const CLUSTER_MENU: &[MenuEntry] = &[
    MenuEntry {
        title: "Dashboard",
        name: "dashboard",
        route_path: "/dashboard",
        icon: "📊",
        keep_alive: false,
    },
    MenuEntry {
        title: "Jobs",
        name: "job",
        route_path: "/job",
        icon: "🗂",
        keep_alive: true,
    },
    MenuEntry {
        title: "Traces",
        name: "trace",
        route_path: "/trace",
        icon: "📅",
        keep_alive: true,
    },
    MenuEntry {
        title: "Cluster",
        name: "cluster",
        route_path: "/cluster",
        icon: "🖥",
        keep_alive: true,
    },
    MenuEntry {
        title: "Users",
        name: "user",
        route_path: "/user",
        icon: "👤",
        keep_alive: true,
    },
    MenuEntry {
        title: "Alarms",
        name: "alarm",
        route_path: "/alarm",
        icon: "🔔",
        keep_alive: true,
    },
    MenuEntry {
        title: "About",
        name: "about",
        route_path: "/about",
        icon: "ℹ️",
        keep_alive: true,
    },
];

pub fn menu_for(run_mode: &str) -> &'static [MenuEntry] {
    if run_mode == RUN_MODE_CLUSTER {
        CLUSTER_MENU
    } else {
        STANDALONE_MENU
    }
}

pub fn entry_by_name(name: &str) -> Option<&'static MenuEntry> {
    CLUSTER_MENU.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_types::RUN_MODE_STANDALONE;

    #[test]
    fn test_standalone_menu_has_no_cluster_page() {
        let menu = menu_for(RUN_MODE_STANDALONE);
        assert!(menu.iter().all(|entry| entry.name != "cluster"));
    }

    #[test]
    fn test_cluster_menu_includes_every_standalone_page() {
        for entry in STANDALONE_MENU {
            assert!(
                CLUSTER_MENU.iter().any(|e| e.name == entry.name),
                "missing {}",
                entry.name
            );
        }
    }

    #[test]
    fn test_only_dashboard_skips_keep_alive() {
        for entry in CLUSTER_MENU {
            assert_eq!(entry.keep_alive, entry.name != "dashboard");
        }
    }

    #[test]
    fn test_entry_lookup() {
        assert_eq!(entry_by_name("job").unwrap().route_path, "/job");
        assert!(entry_by_name("nope").is_none());
    }
}
