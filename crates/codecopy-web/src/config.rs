/// Static site configuration.
pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub author: &'static str,
}

pub static CONFIG: SiteConfig = SiteConfig {
    name: "Code Copy Example",
    tagline: "Click-to-copy code blocks, wired up after hydration",
    author: "Suntown Studio",
};
