//! Site-wide static settings shared by the web crate

/// Static application configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    /// Id of the host element the application mounts into
    pub root_element_id: &'static str,
    /// Global stylesheet, applied once by the shell
    pub stylesheet: &'static str,
}

pub static CONFIG: Config = Config {
    name: "Waypoint",
    tagline: "fragment-routed control panel",

    root_element_id: "app",
    stylesheet: "/main.css",
};
