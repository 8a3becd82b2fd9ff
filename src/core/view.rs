//! The set of screens. One tag per screen; per-screen data lives in `App`
//! keyed by this tag.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Main,
    Movies,
    TvShows,
    Seasons,
    Episodes,
    Search,
    Configure,
}

impl View {
    /// Views that own a record list.
    pub const LISTS: [View; 6] = [
        View::Main,
        View::Movies,
        View::TvShows,
        View::Seasons,
        View::Episodes,
        View::Search,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Main => "Jellyfin TUI",
            View::Movies => "Movies",
            View::TvShows => "TV Shows",
            View::Seasons => "Seasons",
            View::Episodes => "Episodes",
            View::Search => "Search Results",
            View::Configure => "Configure Jellyfin Connection",
        }
    }

    /// Where a back event leads. `None` means back is a no-op here.
    pub fn back_target(self) -> Option<View> {
        match self {
            View::Episodes => Some(View::Seasons),
            View::Seasons => Some(View::TvShows),
            View::Movies | View::TvShows | View::Search => Some(View::Main),
            View::Main | View::Configure => None,
        }
    }

    pub fn has_list(self) -> bool {
        self != View::Configure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_table() {
        assert_eq!(View::Episodes.back_target(), Some(View::Seasons));
        assert_eq!(View::Seasons.back_target(), Some(View::TvShows));
        assert_eq!(View::Movies.back_target(), Some(View::Main));
        assert_eq!(View::TvShows.back_target(), Some(View::Main));
        assert_eq!(View::Search.back_target(), Some(View::Main));
        assert_eq!(View::Main.back_target(), None);
        assert_eq!(View::Configure.back_target(), None);
    }

    #[test]
    fn test_only_configure_has_no_list() {
        assert!(View::LISTS.iter().all(|v| v.has_list()));
        assert!(!View::Configure.has_list());
    }
}
