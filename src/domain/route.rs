/// Screens reachable through navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    Home,
    Academy,
    World,
    Campaign,
    Toybox,
    Library,
    Settings,
}

impl Route {
    /// Resolve an opaque navigation path. Both `/campaign` and
    /// `/app/campaign` address the same screen; anything unknown lands on
    /// the dashboard.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim().trim_end_matches('/');
        let trimmed = trimmed.strip_prefix("/app").unwrap_or(trimmed);
        match trimmed {
            "/home" => Route::Home,
            "/academy" => Route::Academy,
            "/world" => Route::World,
            "/campaign" => Route::Campaign,
            "/toybox" => Route::Toybox,
            "/library" => Route::Library,
            "/settings" => Route::Settings,
            _ => Route::Dashboard,
        }
    }

    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Home => "/app/home",
            Route::Academy => "/app/academy",
            Route::World => "/app/world",
            Route::Campaign => "/app/campaign",
            Route::Toybox => "/app/toybox",
            Route::Library => "/app/library",
            Route::Settings => "/app/settings",
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Home => "Home",
            Route::Academy => "Academy",
            Route::World => "World Building",
            Route::Campaign => "Campaign",
            Route::Toybox => "Toybox",
            Route::Library => "Library",
            Route::Settings => "Settings",
        }
    }

    #[must_use]
    pub fn subtitle(&self) -> &'static str {
        match self {
            Route::Dashboard => "Your table at a glance",
            Route::Home => "Pick up where you left off",
            Route::Academy => "Drills and modules for the four pillars",
            Route::World => "NPCs, locations, items and lore",
            Route::Campaign => "Arcs, plot threads and session history",
            Route::Toybox => "Generators and tools for the table",
            Route::Library => "Saved references and handouts",
            Route::Settings => "Preferences and account",
        }
    }
}
